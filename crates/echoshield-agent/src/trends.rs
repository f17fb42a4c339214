//! Trend analysis over a fetched claim batch
//!
//! Runs detection over every fetched claim (not just the verification batch)
//! and clusters the batch by topic.

use chrono::{DateTime, Utc};
use echoshield_analysis::AnalysisEngine;
use echoshield_domain::traits::Scorer;
use echoshield_domain::{Claim, ClaimId, Topic};
use serde::Serialize;

/// A flagged claim whose engagement exceeded the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighEngagementClaim {
    /// Flagged claim
    pub claim_id: ClaimId,

    /// Claim text
    pub claim: String,

    /// Engagement at fetch time
    pub engagement: u64,

    /// Detection confidence
    pub confidence: u8,
}

/// Trend summary for one fetched batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    /// When the analysis ran
    pub timestamp: DateTime<Utc>,

    /// Claims in the fetched batch
    pub total_claims: usize,

    /// Claims flagged as likely misinformation
    pub detected_misinformation: usize,

    /// Flagged claims with engagement above the threshold, in fetch order
    pub high_engagement_false: Vec<HighEngagementClaim>,

    /// Topics present in the batch, in first-seen order
    pub emerging_topics: Vec<Topic>,
}

impl TrendReport {
    /// Analyze a fetched batch
    ///
    /// A claim counts as high-engagement when it is flagged and its engagement
    /// is strictly greater than `high_engagement_threshold`.
    pub fn analyze<S: Scorer>(
        engine: &AnalysisEngine<S>,
        claims: &[Claim],
        high_engagement_threshold: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut detected_misinformation = 0;
        let mut high_engagement_false = Vec::new();

        for claim in claims {
            let detection = engine.detect_misinformation(&claim.text);
            if !detection.is_misinformation {
                continue;
            }

            detected_misinformation += 1;
            if claim.engagement > high_engagement_threshold {
                high_engagement_false.push(HighEngagementClaim {
                    claim_id: claim.id,
                    claim: claim.text.clone(),
                    engagement: claim.engagement,
                    confidence: detection.confidence,
                });
            }
        }

        let clusters = engine.cluster_claims(claims.iter().map(|c| c.text.as_str()));

        Self {
            timestamp,
            total_claims: claims.len(),
            detected_misinformation,
            high_engagement_false,
            emerging_topics: clusters.topics(),
        }
    }
}
