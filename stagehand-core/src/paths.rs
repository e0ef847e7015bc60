//! File locations inside a project root.
//!
//! Every stagehand file lives directly under the configured project root;
//! the lock file is a hidden sibling of the board it guards.

use std::path::{Path, PathBuf};

pub const REGISTRY_FILE: &str = "subagents.json";
pub const BOARD_FILE: &str = "task-progress.md";
pub const LOCK_FILE: &str = ".task-progress.lock";

/// `<root>/subagents.json`
pub fn registry_path(root: &Path) -> PathBuf {
    root.join(REGISTRY_FILE)
}

/// `<root>/task-progress.md`
pub fn board_path(root: &Path) -> PathBuf {
    root.join(BOARD_FILE)
}

/// `<root>/.task-progress.lock`
pub fn lock_path(root: &Path) -> PathBuf {
    root.join(LOCK_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted() {
        let root = Path::new("/work/site");
        assert_eq!(registry_path(root), PathBuf::from("/work/site/subagents.json"));
        assert_eq!(board_path(root), PathBuf::from("/work/site/task-progress.md"));
        assert_eq!(lock_path(root), PathBuf::from("/work/site/.task-progress.lock"));
    }
}
