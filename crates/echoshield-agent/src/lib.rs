//! EchoShield Agent
//!
//! Periodic verification service: fetches claims from the claim store,
//! verifies the ones it has not seen yet and pushes a dashboard update.
//!
//! # Overview
//!
//! Each cycle:
//! - **Fetches** the current claim batch (an empty or failed fetch ends the cycle)
//! - **Analyzes** trends over the whole batch (detection and topic clustering)
//! - **Verifies** the first unseen claims in fetch order, up to the batch limit
//! - **Aggregates** statistics and alerts over the verified claims
//! - **Publishes** the dashboard update (best effort)
//!
//! Transport failures are logged and never stop the agent.
//!
//! # Usage
//!
//! ## Single Cycle
//!
//! ```no_run
//! use echoshield_agent::Orchestrator;
//! use echoshield_analysis::{AnalysisEngine, RandomScorer};
//! use echoshield_client::BackendClient;
//! use echoshield_domain::TrustedSources;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BackendClient::new("http://localhost:8000")?;
//! let mut orchestrator = Orchestrator::new(
//!     client.clone(),
//!     client,
//!     AnalysisEngine::new(RandomScorer::new()),
//!     TrustedSources::default(),
//! );
//!
//! let outcome = orchestrator.run_cycle().await;
//! println!("Cycle {} skipped: {}", outcome.cycle_id(), outcome.is_skipped());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! use echoshield_agent::{AgentConfig, HttpAgentWorker};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AgentConfig::from_file("echoshield.toml")?;
//! let mut worker = HttpAgentWorker::from_config(&config)?;
//!
//! worker.run_cycles(3).await;
//! println!("{}", worker.metrics().summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! backend_url = "http://localhost:8000"
//! update_interval_secs = 60
//! batch_limit = 3
//! high_engagement_threshold = 5000
//! request_timeout_secs = 30
//! trusted_sources = ["WHO", "CDC", "Reuters Fact-Check"]
//! ```

#![warn(missing_docs)]

mod cli;
mod config;
pub mod dashboard;
mod error;
mod metrics;
mod orchestrator;
pub mod schedule;
mod tracker;
mod trends;
mod worker;

pub use cli::Cli;
pub use config::{AgentConfig, ConfigError};
pub use error::AgentError;
pub use metrics::AgentMetrics;
pub use orchestrator::{CycleOutcome, CycleReport, CycleState, Orchestrator, SkipReason};
pub use tracker::DedupTracker;
pub use trends::{HighEngagementClaim, TrendReport};
pub use worker::{AgentWorker, HttpAgentWorker};
