//! Error types for stagehand-daemon.

use thiserror::Error;

/// Errors surfaced by a single orchestrator tick.
///
/// These never crash the loop: the runtime logs them and waits for the
/// next interval, so a persistent cause (corrupt registry, unreadable
/// board) repeats in the log until fixed.
#[derive(Debug, Error)]
pub enum TickError {
    #[error("registry error: {0}")]
    Registry(#[from] stagehand_core::RegistryError),

    #[error("board error: {0}")]
    Board(#[from] stagehand_board::BoardError),
}

/// Errors from the loop runtime itself.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("tick task join failure: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
