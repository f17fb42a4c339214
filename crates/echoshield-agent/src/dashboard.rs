//! Dashboard aggregation
//!
//! Turns one cycle's verified claims into summary statistics and alerts.

use chrono::{DateTime, Utc};
use echoshield_domain::{
    Alert, AlertSeverity, DashboardStats, DashboardUpdate, VerificationStatus, VerifiedClaim,
};

/// Trust scores below this raise a HIGH severity alert
pub const HIGH_SEVERITY_CUTOFF: u8 = 25;

/// Statistics and alerts for one cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Summary statistics
    pub stats: DashboardStats,

    /// One alert per non-TRUE result, in input order
    pub alerts: Vec<Alert>,
}

/// Compute statistics and alerts over a cycle's results
///
/// An empty slice yields all-zero statistics and no alerts.
///
/// # Examples
///
/// ```
/// use echoshield_agent::dashboard::aggregate;
///
/// let aggregate = aggregate(&[]);
/// assert_eq!(aggregate.stats.total_processed, 0);
/// assert_eq!(aggregate.stats.average_trust_score, 0.0);
/// assert!(aggregate.alerts.is_empty());
/// ```
pub fn aggregate(results: &[VerifiedClaim]) -> Aggregate {
    let mut stats = DashboardStats {
        total_processed: results.len(),
        ..Default::default()
    };
    let mut alerts = Vec::new();
    let mut score_sum: u64 = 0;

    for result in results {
        let verification = &result.verification;
        score_sum += u64::from(verification.truth_score);

        match verification.status {
            VerificationStatus::True => {
                stats.verified_true += 1;
                continue;
            }
            VerificationStatus::Misinformation => stats.misinformation_detected += 1,
            VerificationStatus::PartiallyTrue | VerificationStatus::Unknown => {}
        }

        alerts.push(alert_for(result));
    }

    if !results.is_empty() {
        stats.average_trust_score = round2(score_sum as f64 / results.len() as f64);
    }

    Aggregate { stats, alerts }
}

/// Assemble the dashboard update for a cycle
pub fn build_update(results: Vec<VerifiedClaim>, timestamp: DateTime<Utc>) -> DashboardUpdate {
    let Aggregate { stats, alerts } = aggregate(&results);
    DashboardUpdate {
        timestamp,
        verification_results: results,
        stats,
        alerts,
    }
}

fn alert_for(result: &VerifiedClaim) -> Alert {
    let verification = &result.verification;
    let severity = if verification.truth_score < HIGH_SEVERITY_CUTOFF {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    };
    let title = if verification.status == VerificationStatus::Misinformation {
        "Misinformation Detected"
    } else {
        "Claim Detected"
    };

    Alert {
        severity,
        title: title.to_string(),
        description: result.summary.clone(),
        claim_id: result.claim_id,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
