//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its
//! collaborators. Implementations live in other crates.

use crate::{Claim, DashboardUpdate};
use async_trait::async_trait;
use std::fmt::Display;

/// Source of the current claim batch
///
/// Implemented by the transport layer (echoshield-client)
#[async_trait]
pub trait ClaimSource: Send + Sync {
    /// Error type for fetch operations
    type Error: Display + Send;

    /// Fetch the current batch of unverified or recent claims
    async fn fetch_claims(&self) -> Result<Vec<Claim>, Self::Error>;
}

/// Destination for dashboard updates
///
/// Implemented by the transport layer (echoshield-client)
#[async_trait]
pub trait DashboardSink: Send + Sync {
    /// Error type for publish operations
    type Error: Display + Send;

    /// Push a dashboard update (best effort)
    async fn publish(&self, update: &DashboardUpdate) -> Result<(), Self::Error>;
}

/// Source of the scores and choices the analysis engine cannot derive
///
/// Stands in for a real analysis model. Implemented by the analysis layer
/// (echoshield-analysis) with random and scripted variants.
pub trait Scorer: Send + Sync {
    /// Misinformation likelihood in [0, 100]
    ///
    /// `keyword_match` tells whether the claim mentions a misinformation-prone
    /// keyword, which selects the sub-range the score is drawn from.
    fn detection_confidence(&self, claim_text: &str, keyword_match: bool) -> u8;

    /// Trust score for a claim in [5, 95]
    fn truth_score(&self, claim_text: &str) -> u8;

    /// Pick an index in `0..pool_size` (`pool_size` is never zero)
    fn pick(&self, pool_size: usize) -> usize;

    /// Pick `amount` distinct indices in `0..population`
    ///
    /// `amount` never exceeds `population`.
    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize>;
}
