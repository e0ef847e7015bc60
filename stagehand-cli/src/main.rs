//! Stagehand — Markdown task-board orchestrator CLI.
//!
//! # Usage
//!
//! ```text
//! stagehand init
//! stagehand add-agent [id] [title] [role]
//! stagehand add-task <title> [owner]
//! stagehand sync
//! stagehand run [--interval-ms 6000] [--smoke-cmd <cmd>]
//! ```
//!
//! Every command operates on a project root (default: current directory)
//! holding `subagents.json` and `task-progress.md`. The one-shot commands
//! are independent of any running `stagehand run` loop; they share its
//! files and its save lock, nothing else.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{agent::AddAgentArgs, run::RunArgs, task::AddTaskArgs};

#[derive(Parser, Debug)]
#[command(
    name = "stagehand",
    version,
    about = "Keep a Markdown task board and its agent registry in sync",
    long_about = None,
)]
struct Cli {
    /// Project root holding the board and registry files.
    #[arg(long, global = true, env = "STAGEHAND_ROOT", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the registry and board files if absent.
    Init,

    /// Append a new agent to the registry.
    AddAgent(AddAgentArgs),

    /// Append a raw task line to the board file.
    AddTask(AddTaskArgs),

    /// Load the board and save it if anything is pending.
    Sync,

    /// Run the orchestrator loop in the foreground until ctrl-c.
    Run(RunArgs),
}

fn main() -> Result<()> {
    // `.env` is optional; absence is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init => commands::init::run(&cli.root),
        Commands::AddAgent(args) => args.run(&cli.root),
        Commands::AddTask(args) => args.run(&cli.root),
        Commands::Sync => commands::sync::run(&cli.root),
        Commands::Run(args) => args.run(&cli.root),
    }
}
