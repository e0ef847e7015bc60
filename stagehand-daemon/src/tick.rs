//! One orchestrator tick: load, repair ownership, run due smoke tests,
//! record the first daily summary, check the agent topology, persist.
//!
//! Everything a tick needs arrives in an explicit [`TickContext`]; the
//! only state carried between ticks is the caller's [`Board`], whose
//! decision and daily entries accumulate for the process lifetime while
//! tasks are re-read from disk every tick.

use std::path::PathBuf;

use serde::Serialize;

use stagehand_board::{Board, SaveOutcome};
use stagehand_core::registry;
use stagehand_core::types::{Agent, Artifact, TaskStatus};
use stagehand_tools::{architect, context, SmokeRunner};

use crate::error::TickError;

/// Inputs for a tick invocation.
#[derive(Debug, Clone)]
pub struct TickContext {
    pub root: PathBuf,
    pub smoke: SmokeRunner,
}

impl TickContext {
    pub fn new(root: impl Into<PathBuf>, smoke: SmokeRunner) -> Self {
        TickContext {
            root: root.into(),
            smoke,
        }
    }
}

/// What one tick did, for logging and tests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickReport {
    pub assigned: usize,
    pub smoke_runs: usize,
    pub daily_appended: bool,
    pub merge_proposed: bool,
    pub saved: bool,
}

/// Run one tick against a long-lived `board`.
///
/// Board tasks and the registry are re-read from disk first; nothing is
/// cached across ticks. Errors propagate to the loop, which logs them and
/// keeps running.
pub fn tick(ctx: &TickContext, board: &mut Board) -> Result<TickReport, TickError> {
    board.load()?;
    let agents = registry::load_at(&ctx.root)?;

    let report = TickReport {
        assigned: assign_owners(board, &agents),
        smoke_runs: run_due_smokes(board, &ctx.smoke),
        daily_appended: append_first_daily(board),
        merge_proposed: record_topology_concern(board, &agents),
        saved: false,
    };
    let saved = matches!(board.save_if_dirty()?, SaveOutcome::Written { .. });
    Ok(TickReport { saved, ..report })
}

/// Repair the ownership invariant: every task should reference a
/// registered agent. Tasks with a missing or stale owner get one from the
/// dispatch table; freshly assigned tasks default their scratch status to
/// `todo`.
fn assign_owners(board: &mut Board, agents: &[Agent]) -> usize {
    let mut assigned = 0;
    for task in board.tasks_mut().iter_mut() {
        let valid = task
            .owner
            .as_ref()
            .is_some_and(|owner| agents.iter().any(|a| &a.id == owner));
        if valid {
            continue;
        }
        let Some(agent) = registry::pick_owner_for(agents, task) else {
            continue;
        };
        tracing::info!(task = %task.id, owner = %agent.id, title = %task.title, "assigned owner");
        task.owner = Some(agent.id.clone());
        if task.status.is_none() {
            task.status = Some(TaskStatus::Todo);
        }
        assigned += 1;
    }
    if assigned > 0 {
        board.touch();
    }
    assigned
}

/// Run the smoke tool for every in-progress task flagged `needs_test`.
///
/// Outcomes stay visible: failures are logged, and the artifact records
/// where the report landed. All of it is scratch state that does not
/// survive the next render.
fn run_due_smokes(board: &mut Board, smoke: &SmokeRunner) -> usize {
    let mut runs = 0;
    for task in board.tasks_mut().iter_mut() {
        if !task.needs_test || task.status != Some(TaskStatus::InProgress) {
            continue;
        }
        let outcome = smoke.run(&task.id);
        if outcome.ok {
            tracing::info!(
                task = %task.id,
                report = %outcome.report_path.display(),
                "smoke run passed",
            );
        } else {
            tracing::warn!(
                task = %task.id,
                report = %outcome.report_path.display(),
                error = outcome.error.as_deref().unwrap_or("unknown"),
                "smoke run failed",
            );
        }
        task.artifacts.push(Artifact {
            name: "smoke-report".to_owned(),
            path: outcome.report_path,
        });
        task.needs_test = false;
        runs += 1;
    }
    if runs > 0 {
        board.touch();
    }
    runs
}

/// Append the once-per-process daily summary when none exists yet.
fn append_first_daily(board: &mut Board) -> bool {
    if !board.should_daily_summary() {
        return false;
    }
    let summary = context::board_context(board.tasks());
    board.append_daily_summary(summary);
    true
}

/// Record a merge decision when the registry has grown past the limit.
fn record_topology_concern(board: &mut Board, agents: &[Agent]) -> bool {
    let Some(proposal) = architect::review_topology(agents) else {
        return false;
    };
    tracing::warn!(details = %proposal.details, "agent topology over limit");
    board.append_decision(format!("{}: {}", proposal.action, proposal.details));
    true
}

// ---------------------------------------------------------------------------
// Unit tests — the individual tick steps
// ---------------------------------------------------------------------------
