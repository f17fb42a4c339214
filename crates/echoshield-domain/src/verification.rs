//! Detection and verification outcomes
//!
//! The status thresholds defined here are the single source of truth for how
//! a trust score turns into a verdict. Every other crate goes through
//! [`VerificationStatus::from_truth_score`].

use crate::ClaimId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust score at or above which a claim is verified true
pub const TRUST_SCORE_HIGH: u8 = 75;

/// Trust score at or above which a claim is partially true
pub const TRUST_SCORE_MEDIUM: u8 = 50;

/// Detection confidence above which a claim is flagged as misinformation
pub const MISINFORMATION_CONFIDENCE_CUTOFF: u8 = 50;

/// Result of the keyword-driven misinformation detector
///
/// Consumed immediately by trend analysis; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Whether the claim is likely misinformation
    pub is_misinformation: bool,

    /// Likelihood score in [0, 100]
    pub confidence: u8,

    /// Canned explanation (not load-bearing)
    pub reasoning: String,
}

impl DetectionResult {
    /// Build a detection result, deriving the flag from the confidence
    ///
    /// # Examples
    ///
    /// ```
    /// use echoshield_domain::DetectionResult;
    ///
    /// assert!(DetectionResult::from_confidence(51, "r").is_misinformation);
    /// assert!(!DetectionResult::from_confidence(50, "r").is_misinformation);
    /// ```
    pub fn from_confidence(confidence: u8, reasoning: impl Into<String>) -> Self {
        Self {
            is_misinformation: confidence > MISINFORMATION_CONFIDENCE_CUTOFF,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}

/// Verdict of a verification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Trusted sources confirm the claim
    True,

    /// Partially accurate, missing context
    PartiallyTrue,

    /// Contradicted by trusted sources
    Misinformation,

    /// A status label this build does not recognise (wire input only)
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    /// Map a trust score to its status
    ///
    /// - `>= 75` → `True`
    /// - `>= 50` → `PartiallyTrue`
    /// - otherwise → `Misinformation`
    ///
    /// # Examples
    ///
    /// ```
    /// use echoshield_domain::VerificationStatus;
    ///
    /// assert_eq!(VerificationStatus::from_truth_score(75), VerificationStatus::True);
    /// assert_eq!(VerificationStatus::from_truth_score(74), VerificationStatus::PartiallyTrue);
    /// assert_eq!(VerificationStatus::from_truth_score(49), VerificationStatus::Misinformation);
    /// ```
    pub fn from_truth_score(truth_score: u8) -> Self {
        if truth_score >= TRUST_SCORE_HIGH {
            VerificationStatus::True
        } else if truth_score >= TRUST_SCORE_MEDIUM {
            VerificationStatus::PartiallyTrue
        } else {
            VerificationStatus::Misinformation
        }
    }

    /// Get the wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::True => "TRUE",
            VerificationStatus::PartiallyTrue => "PARTIALLY_TRUE",
            VerificationStatus::Misinformation => "MISINFORMATION",
            VerificationStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of verifying one claim against the trusted sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// The claim that was verified
    pub claim_id: ClaimId,

    /// Human-readable description of how the claim was checked
    pub verification_method: String,

    /// Up to three distinct trusted source names
    pub sources_consulted: Vec<String>,

    /// Trust score in [5, 95]
    pub truth_score: u8,

    /// Verdict derived from `truth_score`
    pub status: VerificationStatus,
}
