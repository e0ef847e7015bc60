//! Four-section board renderer and the seed template.
//!
//! Render order is fixed: header with last-update stamp, Tasks, Decision
//! Log, Daily Sync. Tasks keep only `done`/`id`/`owner`/`title`; scratch
//! fields never reach the file. The seed template additionally carries a
//! Subagents table, which the renderer does not reproduce — it exists for
//! the humans reading a fresh board.

use chrono::{DateTime, Utc};

use stagehand_core::registry::seed_agents;
use stagehand_core::types::{AgentId, DailyEntry, Decision, Task};

/// Board timestamp format: `2026-08-08 12:00:00 UTC`.
pub fn stamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// One checklist line for `task`.
pub fn task_line(task: &Task) -> String {
    let marker = if task.done { "x" } else { " " };
    match &task.owner {
        Some(owner) => format!("- [{marker}] {} [Owner: {owner}] {}", task.id, task.title),
        None => format!("- [{marker}] {} {}", task.id, task.title),
    }
}

/// Render the full board file from in-memory state.
pub fn render_board(
    tasks: &[Task],
    decisions: &[Decision],
    daily: &[DailyEntry],
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str("# Task Progress\n\n");
    out.push_str(&format!("_Last updated: {}_\n\n", stamp(now)));

    out.push_str("## Tasks\n\n");
    for task in tasks {
        out.push_str(&task_line(task));
        out.push('\n');
    }

    out.push_str("\n## Decision Log\n\n");
    if decisions.is_empty() {
        // The section always has at least one line, even on a board that
        // never recorded anything.
        out.push_str(&format!("- [{}] No decisions recorded yet.\n", stamp(now)));
    } else {
        for decision in decisions {
            out.push_str(&format!("- [{}] {}\n", stamp(decision.at), decision.text));
        }
    }

    out.push_str("\n## Daily Sync\n");
    for entry in daily {
        out.push_str(&format!("\n### {}\n\n{}\n", stamp(entry.at), entry.summary));
    }
    out
}

/// The four starter tasks written into a fresh board.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("#T-100", Some(AgentId::from("A0")), "Draft launch plan and PRD", false),
        Task::new(
            "#T-101",
            Some(AgentId::from("A1")),
            "Stand up the agent orchestrator loop",
            false,
        ),
        Task::new(
            "#T-102",
            Some(AgentId::from("A2")),
            "Implement SSR app shell and landing page",
            false,
        ),
        Task::new(
            "#T-103",
            Some(AgentId::from("A4")),
            "Add Playwright smoke tests for the contact form",
            false,
        ),
    ]
}

/// The initial board file: subagents table, the four seed tasks, one
/// decision entry, and an empty Daily Sync section.
pub fn seed_template(now: DateTime<Utc>) -> String {
    let agents = seed_agents();
    let tasks = seed_tasks();

    let mut out = String::new();
    out.push_str("# Task Progress\n\n");
    out.push_str(&format!("_Last updated: {}_\n\n", stamp(now)));

    out.push_str("## Subagents\n\n");
    out.push_str("| ID | Title | Role | Color | Status |\n");
    out.push_str("|----|-------|------|-------|--------|\n");
    for agent in &agents {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            agent.id, agent.title, agent.role, agent.color, agent.status
        ));
    }

    out.push_str("\n## Tasks\n\n");
    for task in &tasks {
        out.push_str(&task_line(task));
        out.push('\n');
    }

    out.push_str("\n## Decision Log\n\n");
    out.push_str(&format!(
        "- [{}] Board initialized with {} seed agents and {} starter tasks.\n",
        stamp(now),
        agents.len(),
        tasks.len()
    ));

    out.push_str("\n## Daily Sync\n");
    out
}
