//! EchoShield Domain Layer
//!
//! This crate contains the data model shared by every stage of the claim
//! verification pipeline. It defines the records that flow through a cycle
//! and the trait interfaces for the collaborators the pipeline talks to.
//!
//! ## Key Concepts
//!
//! - **Claim**: A discrete factual assertion pulled from the claim store
//! - **Detection**: A quick keyword-driven misinformation likelihood score
//! - **Verification**: A trust score and status produced against trusted sources
//! - **Topic**: The cluster label a claim falls into
//! - **Dashboard update**: Per-cycle statistics and alerts pushed to the sink
//!
//! ## Data Flow
//!
//! ```text
//! ClaimSource → analysis → dedup filter → aggregation → DashboardSink
//! ```
//!
//! ## Architecture
//!
//! - Pure data and classification rules only
//! - Transport implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod dashboard;
pub mod sources;
pub mod topic;
pub mod traits;
pub mod verification;

// Re-exports for convenience
pub use claim::{Claim, ClaimId};
pub use dashboard::{Alert, AlertSeverity, DashboardStats, DashboardUpdate, VerifiedClaim};
pub use sources::TrustedSources;
pub use topic::{ClusterMap, Topic};
pub use verification::{DetectionResult, VerificationResult, VerificationStatus};
