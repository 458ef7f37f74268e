//! agenthub - minimal multi-agent coordination scaffold
//!
//! A base agent abstraction, an orchestrator that fans a single request
//! out to every registered agent with per-agent error isolation, and a
//! research stub returning placeholder data.
//!
//! # Architecture
//!
//! - `agent`: the capability contract, orchestrator, and variants
//! - `config`: validated agent configuration
//! - `errors`: crate-wide error taxonomy

pub mod agent;
pub mod config;
pub mod errors;

// Re-export commonly used types
pub use agent::{
    Agent, AgentFailure, AgentStatus, BatchStatus, DispatchError, DispatchOutcome, NoopAgent,
    Orchestrator, ResearchAgent,
};
pub use config::{AgentConfig, ConfigFile};
pub use errors::{AgentError, Result};
