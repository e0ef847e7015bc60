//! # stagehand-board
//!
//! The Markdown task board: line-regex parser, four-section renderer,
//! dirty-tracked in-memory state, and the cross-process file lock that
//! guards saves.
//!
//! Only task checklist lines round-trip through [`Board::load`]; decision
//! and daily entries live in memory for the owning process's lifetime and
//! are re-rendered from there on every save.

pub mod error;
pub mod lock;
pub mod parse;
pub mod render;
pub mod state;

pub use error::BoardError;
pub use lock::BoardLock;
pub use state::{Board, SaveOutcome};
