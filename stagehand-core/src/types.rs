//! Domain types for the stagehand registry and task board.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Registry types serialize via serde + serde_json; board types are
//! rendered to Markdown by `stagehand-board` and never touch JSON.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A short unique agent identifier (e.g. "A0").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A task identifier matching `#T-<n>` or `#B-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Scratch status of a task while a tick is working on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A registry agent record. Agents are labels that own tasks; they are not
/// executing processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub title: String,
    /// Machine tag consumed by ownership dispatch (e.g. "pm", "qa").
    pub role: String,
    /// Hex color, assigned round-robin from the fixed palette.
    pub color: String,
    /// Informational only; never interpreted.
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default = "default_agent_status")]
    pub status: String,
}

fn default_agent_status() -> String {
    "active".to_owned()
}

/// A file produced by a tool run on behalf of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub path: PathBuf,
}

/// A single board task.
///
/// Only `done`, `id`, `owner`, and `title` survive a render/reload cycle;
/// `status`, `needs_test`, and `artifacts` are tick-local scratch state and
/// are never written back to the board file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Owning agent id, if any. May reference an agent that no longer
    /// exists; the orchestrator repairs that lazily, once per tick.
    pub owner: Option<AgentId>,
    pub title: String,
    pub done: bool,
    pub status: Option<TaskStatus>,
    pub needs_test: bool,
    pub artifacts: Vec<Artifact>,
}

impl Task {
    /// A task with no scratch state.
    pub fn new(
        id: impl Into<TaskId>,
        owner: Option<AgentId>,
        title: impl Into<String>,
        done: bool,
    ) -> Self {
        Task {
            id: id.into(),
            owner,
            title: title.into(),
            done,
            status: None,
            needs_test: false,
            artifacts: Vec::new(),
        }
    }
}

/// An append-only decision log entry. Never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// An append-only daily sync entry. Never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry {
    pub at: DateTime<Utc>,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
