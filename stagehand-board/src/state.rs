//! In-memory board state and the dirty-gated save path.

use std::path::{Path, PathBuf};

use chrono::Utc;

use stagehand_core::paths::{board_path, lock_path};
use stagehand_core::types::{DailyEntry, Decision, Task};

use crate::error::{io_err, BoardError};
use crate::lock::BoardLock;
use crate::parse;
use crate::render;

/// Outcome of a [`Board::save_if_dirty`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The board was dirty; the file has been re-rendered and written.
    Written { path: PathBuf },
    /// No unsaved mutations; nothing touched the filesystem.
    Clean,
}

/// Aggregate board state: tasks plus the decision and daily entries
/// accumulated during this process's lifetime.
///
/// One `Board` is meant to live as long as the owning process. [`load`]
/// replaces only the task list; decisions and daily entries are never
/// re-parsed from disk, so entries written by a previous process are
/// dropped at the next save.
///
/// [`load`]: Board::load
#[derive(Debug)]
pub struct Board {
    root: PathBuf,
    tasks: Vec<Task>,
    decisions: Vec<Decision>,
    daily: Vec<DailyEntry>,
    dirty: bool,
}

impl Board {
    /// An empty board bound to `root`. Call [`Board::load`] to read tasks.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Board {
            root: root.into(),
            tasks: Vec::new(),
            decisions: Vec::new(),
            daily: Vec::new(),
            dirty: false,
        }
    }

    /// Write the seed board template if `<root>/task-progress.md` is
    /// absent. Returns `true` when the file was created. Idempotent.
    pub fn ensure(root: &Path) -> Result<bool, BoardError> {
        let path = board_path(root);
        if path.exists() {
            return Ok(false);
        }
        write_atomic(&path, &render::seed_template(Utc::now()))?;
        Ok(true)
    }

    /// Re-read the board file, replacing the in-memory task list.
    ///
    /// Only task checklist lines are parsed; every other section is
    /// regenerated from in-memory state at the next save.
    pub fn load(&mut self) -> Result<(), BoardError> {
        let path = board_path(&self.root);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        self.tasks = parse::parse_tasks(&contents);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Mutable task access for in-tick repairs. Callers are responsible
    /// for calling [`Board::touch`] when they actually change something.
    pub fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn daily(&self) -> &[DailyEntry] {
        &self.daily
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the in-memory state as having unsaved mutations.
    pub fn touch(&mut self) {
        self.dirty = true;
    }

    /// True exactly while no daily entry has been recorded in memory.
    /// This checks presence, not calendar dates: after one append it stays
    /// false for the rest of this state object's lifetime.
    pub fn should_daily_summary(&self) -> bool {
        self.daily.is_empty()
    }

    /// Append a decision entry stamped with the current UTC time.
    pub fn append_decision(&mut self, text: impl Into<String>) {
        self.decisions.push(Decision {
            at: Utc::now(),
            text: text.into(),
        });
        self.dirty = true;
    }

    /// Append a daily sync entry stamped with the current UTC time.
    pub fn append_daily_summary(&mut self, summary: impl Into<String>) {
        self.daily.push(DailyEntry {
            at: Utc::now(),
            summary: summary.into(),
        });
        self.dirty = true;
    }

    /// Re-render and write the whole file when dirty, under the exclusive
    /// file lock; a clean board is a no-op.
    ///
    /// The lock covers only this write, not the load-mutate span that
    /// preceded it, so a concurrent writer's changes can still be lost.
    pub fn save_if_dirty(&mut self) -> Result<SaveOutcome, BoardError> {
        if !self.dirty {
            return Ok(SaveOutcome::Clean);
        }

        let path = board_path(&self.root);
        let _lock = BoardLock::acquire(&lock_path(&self.root))?;
        let content = render::render_board(&self.tasks, &self.decisions, &self.daily, Utc::now());
        write_atomic(&path, &content)?;
        self.dirty = false;
        tracing::debug!(path = %path.display(), "board saved");
        Ok(SaveOutcome::Written { path })
    }
}

/// Write `content` to `path` via a `.tmp` sibling and atomic rename.
fn write_atomic(path: &Path, content: &str) -> Result<(), BoardError> {
    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, err));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::paths;
    use tempfile::TempDir;

    fn board_file(root: &Path) -> String {
        std::fs::read_to_string(board_path(root)).expect("read board")
    }

    #[test]
    fn ensure_writes_template_once() {
        let root = TempDir::new().expect("tempdir");
        assert!(Board::ensure(root.path()).expect("first ensure"));
        let first = board_file(root.path());

        assert!(!Board::ensure(root.path()).expect("second ensure"));
        assert_eq!(board_file(root.path()), first, "second ensure must be a no-op");
    }

    #[test]
    fn load_reads_seed_tasks() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");

        let mut board = Board::new(root.path());
        board.load().expect("load");
        assert_eq!(board.tasks().len(), 4);
        assert_eq!(board.tasks()[0].id.0, "#T-100");
        assert!(!board.is_dirty(), "loading must not dirty the board");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let root = TempDir::new().expect("tempdir");
        let mut board = Board::new(root.path());
        let err = board.load().unwrap_err();
        assert!(matches!(err, BoardError::Io { .. }));
    }

    #[test]
    fn clean_board_save_is_a_noop() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");
        let before = board_file(root.path());

        let mut board = Board::new(root.path());
        board.load().expect("load");
        let outcome = board.save_if_dirty().expect("save");
        assert_eq!(outcome, SaveOutcome::Clean);
        assert_eq!(board_file(root.path()), before, "clean save must not rewrite");
    }

    #[test]
    fn dirty_board_saves_and_clears_flag() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");

        let mut board = Board::new(root.path());
        board.load().expect("load");
        board.touch();
        let outcome = board.save_if_dirty().expect("save");
        assert!(matches!(outcome, SaveOutcome::Written { .. }));
        assert!(!board.is_dirty());

        // Second save with nothing new pending is clean again.
        assert_eq!(board.save_if_dirty().expect("save"), SaveOutcome::Clean);
    }

    #[test]
    fn save_leaves_no_tmp_or_lock_behind() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");

        let mut board = Board::new(root.path());
        board.load().expect("load");
        board.touch();
        board.save_if_dirty().expect("save");

        let tmp = PathBuf::from(format!("{}.tmp", board_path(root.path()).display()));
        assert!(!tmp.exists(), ".tmp must be gone after save");
        assert!(
            !paths::lock_path(root.path()).exists(),
            "lock must be released after save"
        );
    }

    #[test]
    fn appended_entries_survive_the_save() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");

        let mut board = Board::new(root.path());
        board.load().expect("load");
        board.append_decision("merge-agents: registry over limit");
        board.append_daily_summary("Total: 4, Done: 0, Todo: 4");
        board.save_if_dirty().expect("save");

        let contents = board_file(root.path());
        assert!(contents.contains("merge-agents: registry over limit"));
        assert!(contents.contains("Total: 4, Done: 0, Todo: 4"));
    }

    #[test]
    fn should_daily_summary_flips_once() {
        let root = TempDir::new().expect("tempdir");
        let mut board = Board::new(root.path());
        assert!(board.should_daily_summary());
        board.append_daily_summary("Total: 0, Done: 0, Todo: 0");
        assert!(!board.should_daily_summary());
        board.append_daily_summary("Total: 1, Done: 0, Todo: 1");
        assert!(!board.should_daily_summary(), "stays false once appended");
    }

    #[test]
    fn on_disk_decisions_are_not_reparsed() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");

        // First process run records a decision.
        let mut first = Board::new(root.path());
        first.load().expect("load");
        first.append_decision("keep the palette at eight colors");
        first.save_if_dirty().expect("save");
        assert!(board_file(root.path()).contains("keep the palette at eight colors"));

        // A later process never sees it: load keeps tasks only, and its
        // next save regenerates the section from (empty) memory.
        let mut second = Board::new(root.path());
        second.load().expect("load");
        assert!(second.decisions().is_empty());
        second.touch();
        second.save_if_dirty().expect("save");

        let contents = board_file(root.path());
        assert!(!contents.contains("keep the palette at eight colors"));
        assert!(contents.contains("No decisions recorded yet."));
    }

    #[test]
    fn tasks_survive_save_and_reload() {
        let root = TempDir::new().expect("tempdir");
        Board::ensure(root.path()).expect("ensure");

        let mut board = Board::new(root.path());
        board.load().expect("load");
        board.tasks_mut()[0].done = true;
        board.touch();
        board.save_if_dirty().expect("save");

        let mut reloaded = Board::new(root.path());
        reloaded.load().expect("reload");
        assert_eq!(reloaded.tasks().len(), 4);
        assert!(reloaded.tasks()[0].done);
        assert_eq!(reloaded.tasks()[0].title, "Draft launch plan and PRD");
    }
}
