//! Scorer implementations
//!
//! `RandomScorer` draws every score uniformly, matching the placeholder model
//! the pipeline ships with. `ScriptedScorer` returns pre-configured scores so
//! tests can pin exact verdicts.

use echoshield_domain::traits::Scorer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Detection confidence range for claims mentioning a misinformation keyword
pub const KEYWORD_CONFIDENCE_RANGE: RangeInclusive<u8> = 60..=95;

/// Detection confidence range for all other claims
pub const PLAIN_CONFIDENCE_RANGE: RangeInclusive<u8> = 20..=70;

/// Range truth scores are drawn from
pub const TRUTH_SCORE_RANGE: RangeInclusive<u8> = 5..=95;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Uniform random scorer
///
/// # Examples
///
/// ```
/// use echoshield_analysis::RandomScorer;
/// use echoshield_domain::traits::Scorer;
///
/// let scorer = RandomScorer::seeded(7);
/// let score = scorer.truth_score("any claim");
/// assert!((5..=95).contains(&score));
/// ```
#[derive(Debug)]
pub struct RandomScorer {
    rng: Mutex<StdRng>,
}

impl RandomScorer {
    /// Create a scorer seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a reproducible scorer from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for RandomScorer {
    fn detection_confidence(&self, _claim_text: &str, keyword_match: bool) -> u8 {
        let range = if keyword_match {
            KEYWORD_CONFIDENCE_RANGE
        } else {
            PLAIN_CONFIDENCE_RANGE
        };
        lock(&self.rng).gen_range(range)
    }

    fn truth_score(&self, _claim_text: &str) -> u8 {
        lock(&self.rng).gen_range(TRUTH_SCORE_RANGE)
    }

    fn pick(&self, pool_size: usize) -> usize {
        if pool_size == 0 {
            return 0;
        }
        lock(&self.rng).gen_range(0..pool_size)
    }

    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(population);
        rand::seq::index::sample(&mut *lock(&self.rng), population, amount).into_vec()
    }
}

/// Deterministic scorer for testing
///
/// Truth scores are served from a queue; once it runs dry the default score
/// is returned. Detection confidence is fixed per keyword outcome. Choices
/// always take the first pool entry and the first `amount` indices.
///
/// Clones share the same queue and call counter.
///
/// # Examples
///
/// ```
/// use echoshield_analysis::ScriptedScorer;
/// use echoshield_domain::traits::Scorer;
///
/// let scorer = ScriptedScorer::new(80).with_truth_scores([10, 60]);
/// assert_eq!(scorer.truth_score("a"), 10);
/// assert_eq!(scorer.truth_score("b"), 60);
/// assert_eq!(scorer.truth_score("c"), 80);
/// assert_eq!(scorer.truth_score_calls(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedScorer {
    default_truth_score: u8,
    keyword_confidence: u8,
    plain_confidence: u8,
    truth_scores: Arc<Mutex<VecDeque<u8>>>,
    truth_score_calls: Arc<Mutex<usize>>,
}

impl ScriptedScorer {
    /// Create a scorer that always returns `default_truth_score`
    ///
    /// Detection confidence defaults to 90 for keyword matches and 30
    /// otherwise.
    pub fn new(default_truth_score: u8) -> Self {
        Self {
            default_truth_score,
            keyword_confidence: 90,
            plain_confidence: 30,
            truth_scores: Arc::new(Mutex::new(VecDeque::new())),
            truth_score_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue truth scores to return before falling back to the default
    pub fn with_truth_scores(self, scores: impl IntoIterator<Item = u8>) -> Self {
        lock(&self.truth_scores).extend(scores);
        self
    }

    /// Set the detection confidence for keyword and non-keyword claims
    pub fn with_confidences(mut self, keyword_confidence: u8, plain_confidence: u8) -> Self {
        self.keyword_confidence = keyword_confidence;
        self.plain_confidence = plain_confidence;
        self
    }

    /// Queue one more truth score
    pub fn push_truth_score(&self, score: u8) {
        lock(&self.truth_scores).push_back(score);
    }

    /// Number of truth scores handed out so far
    pub fn truth_score_calls(&self) -> usize {
        *lock(&self.truth_score_calls)
    }
}

impl Default for ScriptedScorer {
    fn default() -> Self {
        Self::new(80)
    }
}

impl Scorer for ScriptedScorer {
    fn detection_confidence(&self, _claim_text: &str, keyword_match: bool) -> u8 {
        if keyword_match {
            self.keyword_confidence
        } else {
            self.plain_confidence
        }
    }

    fn truth_score(&self, _claim_text: &str) -> u8 {
        *lock(&self.truth_score_calls) += 1;
        lock(&self.truth_scores)
            .pop_front()
            .unwrap_or(self.default_truth_score)
    }

    fn pick(&self, _pool_size: usize) -> usize {
        0
    }

    fn sample_indices(&self, population: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(population)).collect()
    }
}
