//! Research agent stub
//!
//! Stateless aside from an HTTP client created at the start of each
//! `process` call and dropped on every exit path. The retrieval itself is
//! a placeholder; a real implementation would plug an information
//! retrieval backend in behind `perform_research`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agent::base::Agent;
use crate::config::AgentConfig;
use crate::errors::{AgentError, Result};

/// One retrieval record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRecord {
    pub title: String,
    pub description: String,
    pub source: String,
    pub confidence: f64,
}

/// Success envelope returned by the research agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub status: String,
    pub query: String,
    pub results: Vec<ResearchRecord>,
}

/// Agent specialized in performing research tasks
pub struct ResearchAgent {
    config: AgentConfig,
}

impl ResearchAgent {
    /// Create a research agent from a validated config
    pub fn new(config: AgentConfig) -> Self {
        tracing::info!(agent = %config.name, "initializing agent");
        Self { config }
    }

    /// Placeholder retrieval. A real backend would issue requests through
    /// `client`; here we synthesize fixed-shape records for the query.
    async fn perform_research(
        &self,
        client: &reqwest::Client,
        query: &str,
    ) -> Result<Vec<ResearchRecord>> {
        let _ = client;
        tracing::info!(agent = %self.name(), query = %query, "performing research");

        Ok(vec![
            ResearchRecord {
                title: "Sample Research Result 1".to_string(),
                description: format!("Information about {}", query),
                source: "Example Source".to_string(),
                confidence: 0.85,
            },
            ResearchRecord {
                title: "Sample Research Result 2".to_string(),
                description: format!("Additional information about {}", query),
                source: "Another Source".to_string(),
                confidence: 0.75,
            },
        ])
    }
}

#[async_trait]
impl Agent for ResearchAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Requires a mapping with a non-empty `query` string field
    fn validate_input(&self, input: &Value) -> bool {
        input
            .get("query")
            .and_then(Value::as_str)
            .map(|query| !query.trim().is_empty())
            .unwrap_or(false)
    }

    async fn process(&self, input: &Value) -> Result<Value> {
        // Client lives for exactly this call; dropped on every exit path.
        let client = reqwest::Client::builder().build()?;

        let query = match input.get("query").and_then(Value::as_str) {
            Some(query) if !query.trim().is_empty() => query.to_string(),
            _ => {
                let failure =
                    self.handle_error(&AgentError::MissingField("query".to_string()));
                return Ok(serde_json::to_value(failure)?);
            }
        };

        let results = self.perform_research(&client, &query).await?;

        let response = ResearchResponse {
            status: "success".to_string(),
            query,
            results,
        };
        Ok(serde_json::to_value(response)?)
    }
}
