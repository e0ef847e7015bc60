//! JSON agent registry — seed data, persistence, ownership dispatch.
//!
//! # Storage
//!
//! One pretty-printed JSON array of [`Agent`] records at
//! `<root>/subagents.json`. The file is loaded and saved wholesale; there
//! are no transactional semantics and no repair of a corrupt file.
//!
//! # Ownership dispatch
//!
//! [`pick_owner_for`] classifies a task title against [`ASSIGNMENT_RULES`],
//! an ordered table evaluated first-match-wins. The ordering is part of the
//! contract: later rules are unreachable for any title an earlier pattern
//! already claims.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{io_err, RegistryError};
use crate::paths::registry_path;
use crate::types::{Agent, AgentId, Task};

// ---------------------------------------------------------------------------
// 1. Palette
// ---------------------------------------------------------------------------

/// Fixed color palette, assigned round-robin at agent creation.
pub const PALETTE: [&str; 8] = [
    "#e06c75", "#61afef", "#98c379", "#e5c07b", "#c678dd", "#56b6c2", "#d19a66", "#abb2bf",
];

/// First palette color not present in `used`; once every color is taken,
/// cycles deterministically by `used.len() % PALETTE.len()`.
pub fn next_color(used: &[String]) -> &'static str {
    PALETTE
        .iter()
        .find(|color| !used.iter().any(|u| u == *color))
        .copied()
        .unwrap_or(PALETTE[used.len() % PALETTE.len()])
}

// ---------------------------------------------------------------------------
// 2. Seed data
// ---------------------------------------------------------------------------

/// The nine fixed seed agents written by [`ensure_at`].
pub fn seed_agents() -> Vec<Agent> {
    let seeds: [(&str, &str, &str, &[&str]); 9] = [
        ("A0", "Product Manager", "pm", &["context7"]),
        ("A1", "Orchestrator Lead", "orchestrator", &["agent-architect", "context7"]),
        ("A2", "Frontend Engineer", "frontend", &["playwright"]),
        ("A3", "GitOps Engineer", "gitops", &["git"]),
        ("A4", "QA Engineer", "qa", &["playwright"]),
        ("A5", "Content Writer", "content", &["context7"]),
        ("A6", "Visual Designer", "design", &["figma"]),
        ("A7", "Compliance Auditor", "audit", &["context7"]),
        ("A8", "Docs Writer", "docs", &["context7"]),
    ];

    let mut used: Vec<String> = Vec::new();
    seeds
        .into_iter()
        .map(|(id, title, role, tools)| {
            let color = next_color(&used).to_owned();
            used.push(color.clone());
            Agent {
                id: AgentId::from(id),
                title: title.to_owned(),
                role: role.to_owned(),
                color,
                tools: tools.iter().map(|t| (*t).to_owned()).collect(),
                status: "active".to_owned(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 3. Persistence
// ---------------------------------------------------------------------------

/// Write the seed registry if `<root>/subagents.json` does not exist.
///
/// Returns `true` when the file was created. Idempotent — an existing file
/// is left untouched, whether or not it still parses.
pub fn ensure_at(root: &Path) -> Result<bool, RegistryError> {
    let path = registry_path(root);
    if path.exists() {
        return Ok(false);
    }
    save_at(root, &seed_agents())?;
    Ok(true)
}

/// Load the full agent list into memory.
pub fn load_at(root: &Path) -> Result<Vec<Agent>, RegistryError> {
    let path = registry_path(root);
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    serde_json::from_str(&contents).map_err(|e| RegistryError::Parse { path, source: e })
}

/// Overwrite the registry wholesale, pretty-printed.
///
/// Write flow: serialize → `.tmp` sibling → `rename` (atomic on POSIX; the
/// `.tmp` lives next to the target so the rename never crosses filesystems).
pub fn save_at(root: &Path, agents: &[Agent]) -> Result<(), RegistryError> {
    let path = registry_path(root);
    let json = serde_json::to_string_pretty(agents)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// 4. Ownership dispatch
// ---------------------------------------------------------------------------

/// Ordered `(pattern, role)` dispatch table, first match wins.
pub const ASSIGNMENT_RULES: [(&str, &str); 9] = [
    (r"(?i)plan|prd", "pm"),
    (r"(?i)agent|orchestr", "orchestrator"),
    (r"(?i)implement|frontend", "frontend"),
    (r"(?i)git|commit", "gitops"),
    (r"(?i)test|playwright", "qa"),
    (r"(?i)content|seo", "content"),
    (r"(?i)design|graphic", "design"),
    (r"(?i)audit|compliance", "audit"),
    (r"(?i)docs|readme", "docs"),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ASSIGNMENT_RULES
        .iter()
        .map(|(pattern, role)| {
            let regex =
                Regex::new(pattern).expect("ASSIGNMENT_RULES are compile-time constants");
            (regex, *role)
        })
        .collect()
});

/// Pick an owner for `task` by matching its title against the rule table.
///
/// Returns the first agent whose role matches the first matching rule, or
/// the first agent in `agents` when no rule applies. Pure and
/// order-sensitive — a classifier, not a capacity-aware scheduler; it will
/// happily hand every matching task to the same agent.
pub fn pick_owner_for<'a>(agents: &'a [Agent], task: &Task) -> Option<&'a Agent> {
    for (pattern, role) in COMPILED_RULES.iter() {
        if !pattern.is_match(&task.title) {
            continue;
        }
        if let Some(agent) = agents.iter().find(|a| a.role == *role) {
            return Some(agent);
        }
    }
    agents.first()
}

// ---------------------------------------------------------------------------
// 5. Add agent
// ---------------------------------------------------------------------------

/// Request payload for [`add_agent_at`].
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub id: AgentId,
    pub title: String,
    pub role: String,
    pub tools: Vec<String>,
}

/// Load the current list, append a new agent with the next available
/// palette color and status "active", and persist.
pub fn add_agent_at(root: &Path, new: NewAgent) -> Result<Agent, RegistryError> {
    let mut agents = load_at(root)?;
    let used: Vec<String> = agents.iter().map(|a| a.color.clone()).collect();
    let agent = Agent {
        id: new.id,
        title: new.title,
        role: new.role,
        color: next_color(&used).to_owned(),
        tools: new.tools,
        status: "active".to_owned(),
    };
    agents.push(agent.clone());
    save_at(root, &agents)?;
    Ok(agent)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
