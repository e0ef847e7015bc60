//! Cross-process exclusive lock over the board file.
//!
//! The lock is a sibling file created with `create_new` (exclusive-create)
//! holding the owner's PID as text; its presence denotes "locked".
//! Acquisition retries every 100 ms for up to 5 s, then fails with
//! [`BoardError::LockTimeout`]. Release happens in `Drop`, so the lock
//! file is removed even when the protected write fails.
//!
//! This guards only the write it wraps. Two processes that both loaded
//! earlier can still overwrite each other's changes; the lock keeps the
//! writes themselves from interleaving, nothing more.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{io_err, BoardError};

pub const LOCK_RETRY: Duration = Duration::from_millis(100);
pub const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// An acquired lock. Dropping it removes the lock file.
#[derive(Debug)]
pub struct BoardLock {
    path: PathBuf,
}

impl BoardLock {
    /// Acquire with the default 100 ms retry / 5 s timeout.
    pub fn acquire(path: &Path) -> Result<Self, BoardError> {
        Self::acquire_with(path, LOCK_TIMEOUT, LOCK_RETRY)
    }

    /// Acquire with explicit timing. Tests use this to avoid 5 s waits.
    pub fn acquire_with(
        path: &Path,
        timeout: Duration,
        retry: Duration,
    ) -> Result<Self, BoardError> {
        let started = Instant::now();
        loop {
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
            {
                Ok(mut file) => {
                    // Best-effort PID stamp; the lock is the file's existence.
                    let _ = write!(file, "{}", std::process::id());
                    return Ok(BoardLock {
                        path: path.to_path_buf(),
                    });
                }
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                    if started.elapsed() >= timeout {
                        return Err(BoardError::LockTimeout {
                            path: path.to_path_buf(),
                            waited: started.elapsed(),
                        });
                    }
                    std::thread::sleep(retry);
                }
                Err(err) => return Err(io_err(path, err)),
            }
        }
    }
}

impl Drop for BoardLock {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to remove board lock file",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn short(path: &Path) -> Result<BoardLock, BoardError> {
        BoardLock::acquire_with(path, Duration::from_millis(300), Duration::from_millis(20))
    }

    #[test]
    fn acquire_writes_pid_and_drop_removes() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(".board.lock");

        let lock = short(&path).expect("acquire");
        let contents = std::fs::read_to_string(&path).expect("read lock");
        assert_eq!(contents, std::process::id().to_string());

        drop(lock);
        assert!(!path.exists(), "lock file must be removed on drop");
    }

    #[test]
    fn second_acquire_times_out_while_held() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(".board.lock");

        let _held = short(&path).expect("first acquire");
        let err = short(&path).unwrap_err();
        assert!(matches!(err, BoardError::LockTimeout { .. }));
    }

    #[test]
    fn acquire_succeeds_after_release() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(".board.lock");

        drop(short(&path).expect("first acquire"));
        short(&path).expect("second acquire after release");
    }

    #[test]
    fn waiter_gets_the_lock_once_the_holder_releases() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(".board.lock");

        let held = short(&path).expect("holder");
        let waiter_path = path.clone();
        let waiter = std::thread::spawn(move || {
            BoardLock::acquire_with(
                &waiter_path,
                Duration::from_secs(2),
                Duration::from_millis(10),
            )
        });

        std::thread::sleep(Duration::from_millis(150));
        drop(held);

        let lock = waiter.join().expect("join").expect("waiter acquires");
        drop(lock);
        assert!(!path.exists());
    }
}
