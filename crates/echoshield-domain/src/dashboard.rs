//! Dashboard update records pushed to the sink at the end of a cycle

use crate::{ClaimId, VerificationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One verified claim with its rendered summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedClaim {
    /// The claim that was verified
    pub claim_id: ClaimId,

    /// Claim text at verification time
    pub claim_text: String,

    /// Verification outcome
    pub verification: VerificationResult,

    /// Human-readable summary of the outcome
    pub summary: String,
}

/// Summary statistics over one cycle's verification results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Results with status TRUE
    pub verified_true: usize,

    /// Results with status MISINFORMATION
    pub misinformation_detected: usize,

    /// Mean trust score rounded to 2 decimal places (0 when empty)
    pub average_trust_score: f64,

    /// Number of results aggregated
    pub total_processed: usize,
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    /// Trust score below 25
    High,

    /// Any other non-TRUE result
    Medium,
}

/// Alert raised for a claim that did not verify as TRUE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// How urgent the alert is
    pub severity: AlertSeverity,

    /// Short headline
    pub title: String,

    /// The claim's summary
    pub description: String,

    /// The claim the alert is about
    pub claim_id: ClaimId,
}

/// Everything the dashboard receives for one cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    /// When the update was built
    pub timestamp: DateTime<Utc>,

    /// This cycle's verified claims, in verification order
    pub verification_results: Vec<VerifiedClaim>,

    /// Statistics over `verification_results`
    pub stats: DashboardStats,

    /// Alerts for non-TRUE results, in verification order
    pub alerts: Vec<Alert>,
}
