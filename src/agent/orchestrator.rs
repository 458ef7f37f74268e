//! Orchestrator - named agent registry and fan-out dispatch
//!
//! Holds a registry of agents keyed by name and fans a single request out
//! to all of them, sequentially, with per-agent fault isolation: one
//! agent's failure or rejected input never prevents the remaining agents
//! from running or corrupts their results.

use serde_json::Value;

use crate::agent::base::Agent;
use crate::agent::types::{AgentStatus, DispatchError, DispatchOutcome};
use crate::config::AgentConfig;
use crate::errors::{AgentError, Result};

/// Coordinates between registered agents
pub struct Orchestrator {
    config: AgentConfig,
    agents: Vec<Box<dyn Agent>>,
}

impl Orchestrator {
    /// Create an orchestrator with an empty registry
    pub fn new(config: AgentConfig) -> Self {
        tracing::info!(agent = %config.name, "initializing orchestrator");
        Self {
            config,
            agents: Vec::new(),
        }
    }

    /// Orchestrator's own configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Register an agent under its configured name.
    ///
    /// A later registration with the same name silently replaces the
    /// earlier one, keeping its position in dispatch order. There is no
    /// removal operation.
    pub fn register(&mut self, agent: Box<dyn Agent>) {
        let name = agent.name().to_string();
        match self.agents.iter_mut().find(|existing| existing.name() == name) {
            Some(slot) => *slot = agent,
            None => self.agents.push(agent),
        }
        tracing::info!(agent = %name, "registered agent");
    }

    /// Number of registered agents
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Whether an agent is registered under the given name
    pub fn has_agent(&self, name: &str) -> bool {
        self.agents.iter().any(|agent| agent.name() == name)
    }

    /// Status snapshots for all registered agents, in dispatch order
    pub fn agent_statuses(&self) -> Vec<AgentStatus> {
        self.agents.iter().map(|agent| agent.get_status()).collect()
    }

    /// Fan a single request out to every enabled agent.
    ///
    /// Preconditions (checked before any agent runs): the input must be a
    /// JSON object and at least one agent must be registered; otherwise
    /// this returns a hard error without dispatching.
    ///
    /// Dispatch is strictly sequential in registration order. Disabled
    /// agents are skipped without an error entry; validation rejections
    /// and processing faults are recorded and the loop continues. No fault
    /// escapes the loop body.
    pub async fn process(&self, input: &Value) -> Result<DispatchOutcome> {
        if !input.is_object() {
            return Err(AgentError::InvalidRequest(
                "request must be a JSON object".to_string(),
            ));
        }
        if self.agents.is_empty() {
            tracing::error!(agent = %self.config.name, "no agents registered");
            return Err(AgentError::NoAgentsRegistered);
        }

        let mut results = serde_json::Map::new();
        let mut errors = Vec::new();

        for agent in &self.agents {
            let name = agent.name();

            if !agent.config().enabled {
                tracing::warn!(agent = %name, "agent disabled, skipping");
                continue;
            }

            if !agent.validate_input(input) {
                tracing::warn!(agent = %name, "input validation failed");
                errors.push(DispatchError::validation(name));
                continue;
            }

            match agent.process(input).await {
                Ok(output) => {
                    results.insert(name.to_string(), output);
                }
                Err(error) => {
                    errors.push(DispatchError::Agent(agent.handle_error(&error)));
                }
            }
        }

        Ok(DispatchOutcome::new(results, errors))
    }
}
