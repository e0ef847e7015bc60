//! The orchestrator loop: poll, tick, persist, repeat.
//!
//! A tokio interval drives [`tick`] through `spawn_blocking`; every tick
//! error is logged and the loop keeps going, so a persistent cause repeats
//! in the log until fixed rather than killing the process. Shutdown is
//! explicit: [`OrchestratorHandle::stop`] or ctrl-c, both feeding the same
//! broadcast channel.

use std::time::Duration;

use tokio::sync::broadcast;

use stagehand_board::Board;

use crate::error::DaemonError;
use crate::tick::{tick, TickContext};

/// Default delay between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(6000);

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopping,
    Stopped,
}

/// Control handle for a running [`Orchestrator`]; cheap to clone.
#[derive(Debug, Clone)]
pub struct OrchestratorHandle {
    stop_tx: broadcast::Sender<()>,
}

impl OrchestratorHandle {
    /// Request a graceful stop. The loop finishes any in-flight tick
    /// before winding down.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(());
    }
}

/// The polling loop plus its long-lived board state.
pub struct Orchestrator {
    ctx: TickContext,
    interval: Duration,
    state: LoopState,
    stop_tx: broadcast::Sender<()>,
}

impl Orchestrator {
    pub fn new(ctx: TickContext, interval: Duration) -> Self {
        let (stop_tx, _) = broadcast::channel(4);
        Orchestrator {
            ctx,
            interval,
            state: LoopState::Idle,
            stop_tx,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn handle(&self) -> OrchestratorHandle {
        OrchestratorHandle {
            stop_tx: self.stop_tx.clone(),
        }
    }

    /// Run until [`OrchestratorHandle::stop`] or ctrl-c.
    ///
    /// The board lives here for the whole run, so decision and daily
    /// entries accumulate across ticks while tasks are re-read from disk
    /// each tick. Returns the final state (always `Stopped` on a clean
    /// exit).
    pub async fn run(mut self) -> Result<LoopState, DaemonError> {
        self.state = LoopState::Running;
        tracing::info!(
            root = %self.ctx.root.display(),
            interval_ms = self.interval.as_millis() as u64,
            "orchestrator loop starting",
        );

        // ctrl-c feeds the same stop channel the handle uses.
        let signal_stop = self.stop_tx.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("received ctrl-c, requesting stop");
                    let _ = signal_stop.send(());
                }
                Err(err) => tracing::warn!(error = %err, "ctrl-c handler failed"),
            }
        });

        let mut stop_rx = self.stop_tx.subscribe();
        let mut board = Board::new(self.ctx.root.clone());

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = stop_rx.recv() => {
                    self.state = LoopState::Stopping;
                    tracing::info!("orchestrator loop stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let ctx = self.ctx.clone();
                    let (returned, result) = tokio::task::spawn_blocking(move || {
                        let result = tick(&ctx, &mut board);
                        (board, result)
                    })
                    .await?;
                    board = returned;

                    match result {
                        Ok(report) => tracing::debug!(?report, "tick complete"),
                        // Fails open: the next interval retries from scratch.
                        Err(err) => tracing::error!(error = %err, "tick failed"),
                    }
                }
            }
        }

        self.state = LoopState::Stopped;
        Ok(self.state)
    }
}

/// Build a runtime and drive [`Orchestrator::run`] to completion. This is
/// the entry point for `stagehand run`.
pub fn start_blocking(ctx: TickContext, interval: Duration) -> Result<(), DaemonError> {
    init_tracing();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(Orchestrator::new(ctx, interval).run())?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_tools::SmokeRunner;
    use tempfile::TempDir;

    fn ctx_for(root: &std::path::Path) -> TickContext {
        TickContext::new(root, SmokeRunner::new(root, "true"))
    }

    #[test]
    fn new_orchestrator_is_idle() {
        let root = TempDir::new().expect("tempdir");
        let orch = Orchestrator::new(ctx_for(root.path()), DEFAULT_TICK_INTERVAL);
        assert_eq!(orch.state(), LoopState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn loop_runs_ticks_until_stopped() {
        let root = TempDir::new().expect("tempdir");
        stagehand_core::registry::ensure_at(root.path()).expect("registry");
        Board::ensure(root.path()).expect("board");

        let orch = Orchestrator::new(ctx_for(root.path()), Duration::from_millis(20));
        let handle = orch.handle();
        let running = tokio::spawn(orch.run());

        // Let a handful of ticks land, then stop.
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.stop();
        let state = running.await.expect("join").expect("run");
        assert_eq!(state, LoopState::Stopped);

        let contents =
            std::fs::read_to_string(stagehand_core::paths::board_path(root.path()))
                .expect("board file");
        assert!(contents.contains("Total: 4, Done: 0, Todo: 4"));
        // The daily summary fired exactly once across all ticks.
        assert_eq!(contents.matches("### ").count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn loop_survives_tick_errors() {
        let root = TempDir::new().expect("tempdir");
        // No registry, no board: every tick fails, the loop keeps going.
        let orch = Orchestrator::new(ctx_for(root.path()), Duration::from_millis(20));
        let handle = orch.handle();
        let running = tokio::spawn(orch.run());

        tokio::time::sleep(Duration::from_millis(120)).await;
        handle.stop();
        let state = running.await.expect("join").expect("run");
        assert_eq!(state, LoopState::Stopped, "errors must not kill the loop");
    }
}
