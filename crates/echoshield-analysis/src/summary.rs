//! Summary rendering

use echoshield_domain::{VerificationResult, VerificationStatus};

/// Render the human-readable summary for a verification outcome
///
/// The template is chosen by status alone; an unrecognised status yields a
/// generic "analysis pending" line.
///
/// # Examples
///
/// ```
/// use echoshield_analysis::summary::render_summary;
/// use echoshield_domain::{ClaimId, VerificationResult, VerificationStatus};
///
/// let result = VerificationResult {
///     claim_id: ClaimId::new(1),
///     verification_method: "Analyzed peer-reviewed research".to_string(),
///     sources_consulted: vec![],
///     truth_score: 12,
///     status: VerificationStatus::Misinformation,
/// };
/// assert_eq!(
///     render_summary("The earth is flat", &result),
///     "❌ DEBUNKED: 'The earth is flat' is misinformation. Multiple sources contradict this claim. Trust score: 12%"
/// );
/// ```
pub fn render_summary(claim_text: &str, verification: &VerificationResult) -> String {
    let score = verification.truth_score;
    let method = &verification.verification_method;

    match verification.status {
        VerificationStatus::True => format!(
            "✅ VERIFIED: '{claim_text}' is accurate. Verified through {method}. Trust score: {score}%"
        ),
        VerificationStatus::PartiallyTrue => format!(
            "⚠️ MIXED: '{claim_text}' contains partial truths. Some context may be missing. Trust score: {score}%"
        ),
        VerificationStatus::Misinformation => format!(
            "❌ DEBUNKED: '{claim_text}' is misinformation. Multiple sources contradict this claim. Trust score: {score}%"
        ),
        VerificationStatus::Unknown => format!("Analysis pending for: {claim_text}"),
    }
}
