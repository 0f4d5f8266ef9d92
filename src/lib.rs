//! DataViz Explorer - A terminal explorer for data structures and algorithms
//!
//! This library provides the animated array visualizer, the hands-on array
//! editor, and the terminal UI that presents them.

pub mod ui;
pub mod viz;
