//! # UI Module
//!
//! This module provides the terminal user interface of the explorer.
//!
//! ## Components
//!
//! - [`App`] - Application state (route, focus, sidebar, page state, theme)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`config`] - Persisted theme preference
//! - [`routes`] - Path to page mapping and sidebar data
//! - [`theme`] - Dark and light color themes
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                       │
//! ├──────────────┬──────────────────────────────────┤
//! │  Explore     │   Array boxes                    │
//! │  ──────────  ├────────────┬─────────────────────┤
//! │  Structures  │ Operations │  Code snippet       │
//! │  Algorithms  │            │                     │
//! │  links...    ├────────────┴─────────────────────┤
//! │              │   Status                         │
//! ├──────────────┴──────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod render;
pub mod routes;
pub mod theme;

pub use app::App;
pub use render::render;
