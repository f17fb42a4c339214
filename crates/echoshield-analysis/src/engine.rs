//! Analysis engine facade

use crate::keywords::{self, REASONING_POOL, VERIFICATION_METHODS};
use crate::summary;
use echoshield_domain::traits::Scorer;
use echoshield_domain::{ClaimId, ClusterMap, DetectionResult, VerificationResult, VerificationStatus};

/// Maximum number of trusted sources consulted per verification
pub const MAX_SOURCES_CONSULTED: usize = 3;

/// Stateless claim analysis over a swappable scorer
///
/// All operations are total: empty claim text and empty source lists are
/// valid inputs.
///
/// # Examples
///
/// ```
/// use echoshield_analysis::{AnalysisEngine, ScriptedScorer};
/// use echoshield_domain::Topic;
///
/// let engine = AnalysisEngine::new(ScriptedScorer::default());
///
/// let detection = engine.detect_misinformation("Vaccines contain a microchip");
/// assert!(detection.is_misinformation);
///
/// let clusters = engine.cluster_claims(["Vaccines work", "Cats are liquid"]);
/// assert_eq!(clusters.topics(), vec![Topic::Health, Topic::Other]);
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisEngine<S> {
    scorer: S,
}

impl<S: Scorer> AnalysisEngine<S> {
    /// Create an engine over the given scorer
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Get a reference to the scorer
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score a claim for misinformation likelihood
    ///
    /// Claims mentioning a misinformation-prone keyword draw from the high
    /// confidence range, all others from the low range. The claim is flagged
    /// when confidence exceeds 50.
    pub fn detect_misinformation(&self, claim_text: &str) -> DetectionResult {
        let keyword_match = keywords::mentions_misinformation_keyword(claim_text);
        let confidence = self.scorer.detection_confidence(claim_text, keyword_match);
        let reasoning = pick(&self.scorer, &REASONING_POOL);

        DetectionResult::from_confidence(confidence, reasoning)
    }

    /// Partition claim texts by topic
    ///
    /// Every input text lands in exactly one topic, in input order.
    pub fn cluster_claims<I, T>(&self, claim_texts: I) -> ClusterMap
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut clusters = ClusterMap::new();
        for text in claim_texts {
            let text = text.as_ref();
            clusters.insert(keywords::classify_topic(text), text);
        }
        clusters
    }

    /// Verify a claim against the trusted sources
    ///
    /// Consults up to three distinct sources (all of them if fewer exist) and
    /// derives the status from the trust score.
    pub fn verify_claim(
        &self,
        claim_id: ClaimId,
        claim_text: &str,
        trusted_sources: &[String],
    ) -> VerificationResult {
        let verification_method = pick(&self.scorer, &VERIFICATION_METHODS).to_string();
        let sources_consulted = self.sample_sources(trusted_sources);
        let truth_score = self.scorer.truth_score(claim_text);

        VerificationResult {
            claim_id,
            verification_method,
            sources_consulted,
            truth_score,
            status: VerificationStatus::from_truth_score(truth_score),
        }
    }

    /// Render the summary for a verification outcome
    pub fn generate_summary(&self, claim_text: &str, verification: &VerificationResult) -> String {
        summary::render_summary(claim_text, verification)
    }

    fn sample_sources(&self, trusted_sources: &[String]) -> Vec<String> {
        let amount = MAX_SOURCES_CONSULTED.min(trusted_sources.len());
        if amount == 0 {
            return Vec::new();
        }

        let mut consulted: Vec<String> = Vec::with_capacity(amount);
        for index in self.scorer.sample_indices(trusted_sources.len(), amount) {
            if let Some(source) = trusted_sources.get(index) {
                if !consulted.contains(source) {
                    consulted.push(source.clone());
                }
            }
        }
        consulted.truncate(amount);
        consulted
    }
}

fn pick<'a, S: Scorer>(scorer: &S, pool: &'a [&'a str]) -> &'a str {
    let index = scorer.pick(pool.len());
    pool.get(index).copied().unwrap_or(pool[0])
}
