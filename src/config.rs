use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{AgentError, Result};

fn default_enabled() -> bool {
    true
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    30
}

/// Validated configuration value object consumed by every agent.
///
/// Immutable once constructed. `max_retries` and `timeout_secs` are
/// declared but not consulted by the dispatch loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AgentConfig {
    /// Create a config with default flags, failing on an invalid name
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let config = Self {
            name: name.into(),
            description: description.into(),
            enabled: default_enabled(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Reject configs whose name is empty after trimming
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AgentError::ConfigError(
                "agent name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Agent declarations loaded from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub agents: Vec<AgentConfig>,
}

impl ConfigFile {
    /// Load and validate agent declarations from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let config: ConfigFile = toml::from_str(&contents)
            .map_err(|e| AgentError::ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;

        for agent in &config.agents {
            agent.validate()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = AgentConfig::new("research", "Research agent").unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(AgentConfig::new("", "no name").is_err());
        assert!(AgentConfig::new("   ", "whitespace name").is_err());
    }

    #[test]
    fn test_builder_flags() {
        let config = AgentConfig::new("research", "")
            .unwrap()
            .with_enabled(false)
            .with_max_retries(5)
            .with_timeout_secs(10);

        assert!(!config.enabled);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_serde_defaults() {
        let config: AgentConfig = toml::from_str(r#"name = "research""#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.description.is_empty());
    }

    #[test]
    fn test_serde_type_mismatch_fails() {
        // max_retries given a string must fail deserialization
        let result: std::result::Result<AgentConfig, _> =
            toml::from_str(r#"name = "research"
max_retries = "three""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[agents]]
name = "research"
description = "Research agent for information gathering"

[[agents]]
name = "archive"
enabled = false
"#
        )
        .unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.agents.len(), 2);
        assert_eq!(config.agents[0].name, "research");
        assert!(config.agents[0].enabled);
        assert!(!config.agents[1].enabled);
    }

    #[test]
    fn test_config_file_rejects_invalid_name() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[agents]]
name = "  "
"#
        )
        .unwrap();

        assert!(ConfigFile::load(file.path()).is_err());
    }

    #[test]
    fn test_config_file_missing_path() {
        let result = ConfigFile::load(Path::new("/nonexistent/agents.toml"));
        assert!(result.is_err());
    }
}
