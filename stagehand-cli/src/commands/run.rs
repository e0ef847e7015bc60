//! `stagehand run` — foreground orchestrator loop.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use stagehand_daemon::{start_blocking, TickContext};
use stagehand_tools::{SmokeRunner, DEFAULT_SMOKE_CMD};

/// Run the orchestrator loop in the foreground until ctrl-c.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Delay between ticks, in milliseconds.
    #[arg(long, env = "STAGEHAND_TICK_MS", default_value_t = 6000)]
    pub interval_ms: u64,

    /// Shell command invoked for smoke-test runs.
    #[arg(long, env = "STAGEHAND_SMOKE_CMD", default_value = DEFAULT_SMOKE_CMD)]
    pub smoke_cmd: String,
}

impl RunArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let smoke = SmokeRunner::new(root, self.smoke_cmd);
        let ctx = TickContext::new(root, smoke);
        start_blocking(ctx, Duration::from_millis(self.interval_ms))
            .context("orchestrator loop exited with error")
    }
}
