//! Error types for stagehand-board.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// All errors that can arise from board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lock file stayed held past the acquisition timeout. Distinct
    /// from plain I/O failures so callers can tell contention from a
    /// broken filesystem.
    #[error("timed out acquiring board lock at {path} after {waited:?}")]
    LockTimeout { path: PathBuf, waited: Duration },
}

/// Convenience constructor for [`BoardError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BoardError {
    BoardError::Io {
        path: path.into(),
        source,
    }
}
