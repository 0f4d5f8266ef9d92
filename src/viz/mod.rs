//! # Visualization Module
//!
//! The state behind every array page, independent of the terminal.
//!
//! ## Components
//!
//! - [`catalog`] - The five operations and their code snippets
//! - [`engine`] - Animated Access/Insert/Remove/Iterate/Search over an array
//! - [`editor`] - User-driven add/remove/search variant
//! - [`scheduler`] - Cancellable deadline queue both of them run on
//!
//! Time is always passed in as an [`std::time::Instant`]; nothing in this
//! module reads the clock or sleeps.

pub mod catalog;
pub mod editor;
pub mod engine;
pub mod scheduler;

pub use catalog::{catalog, Operation, OperationRecord};
pub use editor::{ArrayEditor, ArrayItem, SearchOutcome};
pub use engine::{ArrayEngine, Outcome, Phase, Step};
pub use scheduler::{Scheduler, TimerHandle};

/// One box on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: i64,
    pub highlighted: bool,
    pub is_new: bool,
}
