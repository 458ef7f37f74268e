//! Status and result envelopes
//!
//! The shapes shared by agents and the orchestrator: read-only status
//! snapshots, structured per-agent failures, and the aggregated outcome of
//! one fan-out dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only snapshot of an agent's identity and availability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub status: String,
}

/// Structured error envelope produced by `handle_error`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentFailure {
    pub status: String,
    pub message: String,
    pub agent: String,
}

impl AgentFailure {
    /// Create a failure envelope for the named agent
    pub fn new(agent: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            agent: agent.into(),
        }
    }
}

/// Overall outcome of a batch dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Success,
    PartialSuccess,
}

/// One recorded per-agent fault in a batch.
///
/// Validation rejections are plain strings; processing faults carry the
/// structured envelope. Untagged so the serialized error list mixes both
/// shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DispatchError {
    Agent(AgentFailure),
    Validation(String),
}

impl DispatchError {
    /// Validation-failure entry naming the rejecting agent
    pub fn validation(agent: &str) -> Self {
        DispatchError::Validation(format!("Input validation failed for {}", agent))
    }

    /// Whether this entry references the named agent
    pub fn concerns(&self, agent: &str) -> bool {
        match self {
            DispatchError::Validation(message) => message.contains(agent),
            DispatchError::Agent(failure) => failure.agent == agent,
        }
    }
}

/// Aggregated result of one fan-out dispatch, constructed fresh per request
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    pub status: BatchStatus,
    pub results: serde_json::Map<String, Value>,
    pub errors: Vec<DispatchError>,
}

impl DispatchOutcome {
    /// Build an outcome, deriving the status from the error list.
    ///
    /// An empty run (all agents disabled) has no errors and therefore
    /// reports success.
    pub fn new(results: serde_json::Map<String, Value>, errors: Vec<DispatchError>) -> Self {
        let status = if errors.is_empty() {
            BatchStatus::Success
        } else {
            BatchStatus::PartialSuccess
        };
        Self {
            status,
            results,
            errors,
        }
    }

    /// Whether every dispatched agent completed cleanly
    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_envelope_shape() {
        let failure = AgentFailure::new("research", "backend unavailable");
        let value = serde_json::to_value(&failure).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["agent"], "research");
        assert_eq!(value["message"], "backend unavailable");
    }

    #[test]
    fn test_batch_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BatchStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&BatchStatus::PartialSuccess).unwrap(),
            "\"partial_success\""
        );
    }

    #[test]
    fn test_dispatch_error_untagged() {
        let validation = DispatchError::validation("research");
        let value = serde_json::to_value(&validation).unwrap();
        assert!(value.is_string());

        let structured = DispatchError::Agent(AgentFailure::new("research", "boom"));
        let value = serde_json::to_value(&structured).unwrap();
        assert_eq!(value["agent"], "research");
    }

    #[test]
    fn test_dispatch_error_concerns() {
        let validation = DispatchError::validation("research");
        assert!(validation.concerns("research"));
        assert!(!validation.concerns("archive"));

        let structured = DispatchError::Agent(AgentFailure::new("archive", "boom"));
        assert!(structured.concerns("archive"));
        assert!(!structured.concerns("research"));
    }

    #[test]
    fn test_outcome_status_derivation() {
        let empty = DispatchOutcome::new(serde_json::Map::new(), vec![]);
        assert!(empty.is_success());

        let mut results = serde_json::Map::new();
        results.insert("noop".to_string(), json!({"status": "success"}));
        let partial =
            DispatchOutcome::new(results, vec![DispatchError::validation("research")]);
        assert_eq!(partial.status, BatchStatus::PartialSuccess);
        assert!(!partial.is_success());
    }
}
