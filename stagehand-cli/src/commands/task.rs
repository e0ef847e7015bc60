//! `stagehand add-task <title> [owner]` — raw checklist-line append.
//!
//! Deliberately bypasses the structured renderer: the line is appended to
//! the end of the file as plain text (a fast path for humans and scripts),
//! and the next structured save folds it into the Tasks section.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use rand::Rng;

use stagehand_core::paths::board_path;

/// Append a raw task line to the board file.
#[derive(Args, Debug)]
pub struct AddTaskArgs {
    /// Task title.
    pub title: Option<String>,

    /// Owning agent id.
    #[arg(default_value = "A0")]
    pub owner: String,
}

impl AddTaskArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let Some(title) = self.title else {
            eprintln!("usage: stagehand add-task <title> [owner]");
            bail!("missing task title");
        };

        let path = board_path(root);
        let id = rand::thread_rng().gen_range(100..=999);
        let line = format!("- [ ] #T-{id} [Owner: {}] {title}\n", self.owner);

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .with_context(|| {
                format!(
                    "cannot open '{}' — run `stagehand init` first",
                    path.display()
                )
            })?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to append to '{}'", path.display()))?;

        println!("{} appended #T-{id} [Owner: {}] {title}", "✓".green(), self.owner);
        Ok(())
    }
}
