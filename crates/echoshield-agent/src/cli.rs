//! Command-line arguments for the agent binary.

use crate::config::{AgentConfig, ConfigError};
use clap::Parser;
use std::path::PathBuf;

/// EchoShield verification agent - periodically verifies claims and updates the dashboard.
#[derive(Debug, Parser)]
#[command(name = "echoshield-agent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the claim store
    #[arg(long, env = "ECHOSHIELD_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Seconds between cycles
    #[arg(short, long, env = "AGENT_UPDATE_INTERVAL")]
    pub interval: Option<u64>,

    /// Run this many cycles and exit instead of running until Ctrl+C
    #[arg(long)]
    pub cycles: Option<usize>,
}

impl Cli {
    /// Resolve the effective configuration
    ///
    /// Starts from the config file (or defaults) and applies flag and
    /// environment overrides on top.
    pub fn resolve_config(&self) -> Result<AgentConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AgentConfig::from_file(path)?,
            None => AgentConfig::default(),
        };

        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(interval) = self.interval {
            config.update_interval_secs = interval;
        }

        config.validate()?;
        Ok(config)
    }
}
