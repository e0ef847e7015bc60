//! Agent-topology heuristic.

use serde::Serialize;

use stagehand_core::types::Agent;

/// Registry size above which a merge is proposed.
pub const MAX_AGENTS: usize = 10;

/// A proposed registry restructuring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeProposal {
    pub action: String,
    pub details: String,
}

/// `Some` merge proposal exactly when the agent count exceeds
/// [`MAX_AGENTS`]; `None` otherwise.
pub fn review_topology(agents: &[Agent]) -> Option<MergeProposal> {
    if agents.len() <= MAX_AGENTS {
        return None;
    }
    Some(MergeProposal {
        action: "merge-agents".to_owned(),
        details: format!(
            "{} agents registered, over the {} limit; consolidate overlapping roles",
            agents.len(),
            MAX_AGENTS
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::registry::seed_agents;
    use stagehand_core::types::AgentId;

    fn registry_of(n: usize) -> Vec<Agent> {
        let template = seed_agents();
        (0..n)
            .map(|i| {
                let mut agent = template[i % template.len()].clone();
                agent.id = AgentId::from(format!("A{i}"));
                agent
            })
            .collect()
    }

    #[test]
    fn at_or_below_limit_is_fine() {
        assert!(review_topology(&registry_of(9)).is_none());
        assert!(review_topology(&registry_of(10)).is_none());
    }

    #[test]
    fn over_limit_proposes_merge() {
        let proposal = review_topology(&registry_of(11)).expect("proposal");
        assert_eq!(proposal.action, "merge-agents");
        assert!(proposal.details.contains("11 agents"));
    }
}
