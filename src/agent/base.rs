//! Base agent contract
//!
//! Every agent implements the process/validate/handle-error/status
//! contract. The trait carries the base behavior (accept any input,
//! convert faults to structured envelopes); concrete variants override
//! what they need.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::agent::types::{AgentFailure, AgentStatus};
use crate::config::AgentConfig;
use crate::errors::{AgentError, Result};

/// Capability contract implemented by every agent in the system
#[async_trait]
pub trait Agent: Send + Sync {
    /// Configuration backing this agent
    fn config(&self) -> &AgentConfig;

    /// Agent name, the registry key within an orchestrator
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Transform a structured input into a structured output.
    ///
    /// Expected business-level failures are returned as error-shaped
    /// output values; `Err` is reserved for faults, which the dispatch
    /// loop converts through [`Agent::handle_error`].
    async fn process(&self, input: &Value) -> Result<Value>;

    /// Pure pre-dispatch gate. Base behavior accepts anything.
    fn validate_input(&self, _input: &Value) -> bool {
        true
    }

    /// Convert a fault into a structured error envelope. Never fails.
    fn handle_error(&self, error: &AgentError) -> AgentFailure {
        tracing::error!(agent = %self.name(), error = %error, "agent processing failed");
        AgentFailure::new(self.name(), error.to_string())
    }

    /// Read-only status snapshot. Agents have no lifecycle beyond
    /// construction, so a constructed agent always reports "active".
    fn get_status(&self) -> AgentStatus {
        let config = self.config();
        AgentStatus {
            name: config.name.clone(),
            description: config.description.clone(),
            enabled: config.enabled,
            status: "active".to_string(),
        }
    }
}

/// No-op agent exposing the base behavior: accepts any input and returns
/// an acknowledgment envelope echoing it back.
pub struct NoopAgent {
    config: AgentConfig,
}

impl NoopAgent {
    /// Create a no-op agent from a validated config
    pub fn new(config: AgentConfig) -> Self {
        tracing::info!(agent = %config.name, "initializing agent");
        Self { config }
    }
}

#[async_trait]
impl Agent for NoopAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn process(&self, input: &Value) -> Result<Value> {
        Ok(json!({
            "status": "success",
            "agent": self.name(),
            "echo": input,
        }))
    }
}
