//! Agent capability contract and concrete variants
//!
//! Core agent components: the base contract, envelope types, the
//! orchestrator registry, and the research stub.

pub mod base;
pub mod orchestrator;
pub mod research;
pub mod types;

// Re-export commonly used types
pub use base::{Agent, NoopAgent};
pub use orchestrator::Orchestrator;
pub use research::{ResearchAgent, ResearchRecord, ResearchResponse};
pub use types::{AgentFailure, AgentStatus, BatchStatus, DispatchError, DispatchOutcome};
