//! Error types for the agenthub coordination system
//!
//! Configuration and orchestrator precondition failures surface as hard
//! errors; everything an individual agent raises is contained by the
//! dispatch loop and converted to data.

use thiserror::Error;

/// Main error type for the agent system
#[derive(Error, Debug)]
pub enum AgentError {
    /// Malformed agent configuration, fails fast at construction
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Request rejected before dispatch
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Dispatch attempted with an empty registry
    #[error("No agents registered with orchestrator")]
    NoAgentsRegistered,

    /// A required input field is absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Agent error: {0}")]
    Generic(String),
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Convert anyhow errors to AgentError
impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::Generic(err.to_string())
    }
}
