//! `stagehand sync` — load then save-if-dirty.
//!
//! A fresh process has no pending in-memory mutations, so this amounts to
//! a board read plus a no-op save; it still proves the board file exists
//! and parses, which is what makes it useful in scripts.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use stagehand_board::{Board, SaveOutcome};

pub fn run(root: &Path) -> Result<()> {
    let mut board = Board::new(root);
    board
        .load()
        .context("failed to load board — run `stagehand init` first")?;

    match board.save_if_dirty().context("failed to save board")? {
        SaveOutcome::Written { path } => {
            println!("{} wrote {}", "✓".green(), path.display());
        }
        SaveOutcome::Clean => {
            println!(
                "{} board clean ({} tasks); nothing to write",
                "·".dimmed(),
                board.tasks().len()
            );
        }
    }
    Ok(())
}
