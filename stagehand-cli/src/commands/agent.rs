//! `stagehand add-agent [id] [title] [role]`

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rand::Rng;

use stagehand_core::registry::{self, NewAgent};
use stagehand_core::types::AgentId;

/// Append a new agent to the registry.
#[derive(Args, Debug)]
pub struct AddAgentArgs {
    /// Agent id (e.g. "A12"); random A10-A99 when omitted.
    pub id: Option<String>,

    /// Human-readable role title.
    #[arg(default_value = "Custom Agent")]
    pub title: String,

    /// Machine role tag consumed by ownership dispatch.
    #[arg(default_value = "custom")]
    pub role: String,
}

impl AddAgentArgs {
    pub fn run(self, root: &Path) -> Result<()> {
        let id = self.id.unwrap_or_else(random_agent_id);
        let agent = registry::add_agent_at(
            root,
            NewAgent {
                id: AgentId::from(id),
                title: self.title,
                role: self.role,
                tools: Vec::new(),
            },
        )
        .context("failed to add agent — run `stagehand init` first")?;

        println!(
            "{} added agent {} ({}, {})",
            "✓".green(),
            agent.id,
            agent.role,
            agent.color
        );
        Ok(())
    }
}

fn random_agent_id() -> String {
    format!("A{}", rand::thread_rng().gen_range(10..=99))
}
