//! Configuration for the verification agent
//!
//! Defines the store endpoint, cycle interval, batch limit and trusted
//! source registry.

use echoshield_domain::sources::DEFAULT_TRUSTED_SOURCES;
use echoshield_domain::TrustedSources;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds a value the agent cannot run with
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Configuration for the verification agent
///
/// # Examples
///
/// ```
/// use echoshield_agent::AgentConfig;
///
/// let config = AgentConfig::default();
/// assert_eq!(config.update_interval_secs, 60);
/// assert_eq!(config.batch_limit, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Base URL of the claim store
    /// Default: http://localhost:8000
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Seconds to sleep between cycles (must be > 0)
    /// Default: 60
    #[serde(default = "default_update_interval_secs")]
    pub update_interval_secs: u64,

    /// Unseen claims verified per cycle
    /// Default: 3
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,

    /// Engagement above which a flagged claim is reported as high-engagement
    /// Default: 5000
    #[serde(default = "default_high_engagement_threshold")]
    pub high_engagement_threshold: u64,

    /// Timeout applied to each store request (seconds)
    /// Default: 30
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Trusted sources consulted during verification, in order
    #[serde(default = "default_trusted_sources")]
    pub trusted_sources: Vec<String>,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_update_interval_secs() -> u64 {
    60
}

fn default_batch_limit() -> usize {
    3
}

fn default_high_engagement_threshold() -> u64 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_trusted_sources() -> Vec<String> {
    DEFAULT_TRUSTED_SOURCES.iter().map(|s| s.to_string()).collect()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            update_interval_secs: default_update_interval_secs(),
            batch_limit: default_batch_limit(),
            high_engagement_threshold: default_high_engagement_threshold(),
            request_timeout_secs: default_request_timeout_secs(),
            trusted_sources: default_trusted_sources(),
        }
    }
}

impl AgentConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::Invalid("backend_url cannot be empty".to_string()));
        }
        if self.update_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "update_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.batch_limit == 0 {
            return Err(ConfigError::Invalid("batch_limit must be greater than 0".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.trusted_source_registry()?;
        Ok(())
    }

    /// Get the cycle interval as Duration
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs)
    }

    /// Get the request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build the trusted source registry
    pub fn trusted_source_registry(&self) -> Result<TrustedSources, ConfigError> {
        TrustedSources::new(self.trusted_sources.clone()).map_err(ConfigError::Invalid)
    }
}
