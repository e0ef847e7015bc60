//! # stagehand-daemon
//!
//! The orchestrator loop: a single-process poller that repairs task
//! ownership, runs due smoke tests, records the first daily summary, and
//! persists the board once per tick.

pub mod error;
pub mod runtime;
pub mod tick;

pub use error::{DaemonError, TickError};
pub use runtime::{
    start_blocking, LoopState, Orchestrator, OrchestratorHandle, DEFAULT_TICK_INTERVAL,
};
pub use tick::{tick, TickContext, TickReport};
