//! `stagehand init` — create the registry and board files if absent.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use stagehand_board::Board;
use stagehand_core::{paths, registry};

pub fn run(root: &Path) -> Result<()> {
    let created_registry = registry::ensure_at(root)
        .with_context(|| format!("failed to create registry under '{}'", root.display()))?;
    let created_board = Board::ensure(root)
        .with_context(|| format!("failed to create board under '{}'", root.display()))?;

    report("registry", paths::REGISTRY_FILE, created_registry);
    report("board", paths::BOARD_FILE, created_board);
    Ok(())
}

fn report(what: &str, file: &str, created: bool) {
    if created {
        println!("{} created {what}: {file}", "✓".green());
    } else {
        println!("{} {what} already present: {file}", "·".dimmed());
    }
}
