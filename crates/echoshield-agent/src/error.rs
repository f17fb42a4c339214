//! Error types for agent setup
//!
//! A running cycle never fails; these only surface while building the agent.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while building the agent
#[derive(Error, Debug)]
pub enum AgentError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Claim store client could not be created
    #[error("Client error: {0}")]
    Client(#[from] echoshield_client::ClientError),
}
