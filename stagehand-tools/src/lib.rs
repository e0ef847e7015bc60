//! # stagehand-tools
//!
//! Thin collaborator stubs consumed by the orchestrator tick: a one-line
//! board context summary, an agent-topology heuristic, and the smoke-test
//! shell-out. Real implementations of these collaborators live elsewhere;
//! the orchestrator only needs their shapes.

pub mod architect;
pub mod context;
pub mod smoke;

pub use architect::{review_topology, MergeProposal, MAX_AGENTS};
pub use context::board_context;
pub use smoke::{SmokeOutcome, SmokeRunner, DEFAULT_SMOKE_CMD};
