//! Verification cycle orchestration
//!
//! One cycle walks `Idle → Fetching → Analyzing → Verifying → Aggregating →
//! Publishing → Idle`. Transport failures are logged and never fatal: a
//! failed or empty fetch ends the cycle early without publishing, and a
//! failed publish still completes the cycle.

use crate::dashboard;
use crate::metrics::AgentMetrics;
use crate::tracker::DedupTracker;
use crate::trends::TrendReport;
use chrono::Utc;
use echoshield_analysis::AnalysisEngine;
use echoshield_domain::traits::{ClaimSource, DashboardSink, Scorer};
use echoshield_domain::{Claim, DashboardUpdate, TrustedSources, VerifiedClaim};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Default number of unseen claims verified per cycle
pub const DEFAULT_BATCH_LIMIT: usize = 3;

/// Default engagement threshold for high-engagement reporting
pub const DEFAULT_HIGH_ENGAGEMENT_THRESHOLD: u64 = 5000;

/// Where the orchestrator is within a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleState {
    /// Waiting for the next cycle
    Idle,
    /// Requesting claims from the store
    Fetching,
    /// Running trend detection and clustering
    Analyzing,
    /// Verifying the batch of unseen claims
    Verifying,
    /// Computing statistics and alerts
    Aggregating,
    /// Pushing the dashboard update
    Publishing,
    /// Terminal; no further cycles run
    Stopped,
}

impl CycleState {
    /// Lowercase state name
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleState::Idle => "idle",
            CycleState::Fetching => "fetching",
            CycleState::Analyzing => "analyzing",
            CycleState::Verifying => "verifying",
            CycleState::Aggregating => "aggregating",
            CycleState::Publishing => "publishing",
            CycleState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a cycle ended before publishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The store returned no claims
    EmptyBatch,
    /// The fetch failed; carries the transport error message
    FetchFailed(String),
    /// The orchestrator has been stopped
    Stopped,
}

/// What a completed cycle produced
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Identifier used in this cycle's log lines
    pub cycle_id: Uuid,

    /// Trend analysis over the whole fetched batch
    pub trends: TrendReport,

    /// The update handed to the sink
    pub update: DashboardUpdate,

    /// Whether the sink accepted the update
    pub published: bool,
}

/// Result of one cycle
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// The cycle reached the publishing step
    Completed(CycleReport),

    /// The cycle ended early without publishing
    Skipped {
        /// Identifier used in this cycle's log lines
        cycle_id: Uuid,
        /// Why it ended early
        reason: SkipReason,
    },
}

impl CycleOutcome {
    /// Identifier of the cycle
    pub fn cycle_id(&self) -> Uuid {
        match self {
            CycleOutcome::Completed(report) => report.cycle_id,
            CycleOutcome::Skipped { cycle_id, .. } => *cycle_id,
        }
    }

    /// The report, if the cycle completed
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            CycleOutcome::Completed(report) => Some(report),
            CycleOutcome::Skipped { .. } => None,
        }
    }

    /// Whether the cycle ended early
    pub fn is_skipped(&self) -> bool {
        matches!(self, CycleOutcome::Skipped { .. })
    }
}

/// Drives fetch, analysis, verification, aggregation and publishing
///
/// Owns the dedup tracker, so each claim id is verified at most once for
/// the life of the orchestrator.
pub struct Orchestrator<Src, Snk, Sc> {
    source: Src,
    sink: Snk,
    engine: AnalysisEngine<Sc>,
    trusted_sources: TrustedSources,
    tracker: DedupTracker,
    metrics: AgentMetrics,
    state: CycleState,
    batch_limit: usize,
    high_engagement_threshold: u64,
}

impl<Src, Snk, Sc> Orchestrator<Src, Snk, Sc>
where
    Src: ClaimSource,
    Snk: DashboardSink,
    Sc: Scorer,
{
    /// Create an orchestrator with default batch limit and threshold
    pub fn new(
        source: Src,
        sink: Snk,
        engine: AnalysisEngine<Sc>,
        trusted_sources: TrustedSources,
    ) -> Self {
        Self {
            source,
            sink,
            engine,
            trusted_sources,
            tracker: DedupTracker::new(),
            metrics: AgentMetrics::new(),
            state: CycleState::Idle,
            batch_limit: DEFAULT_BATCH_LIMIT,
            high_engagement_threshold: DEFAULT_HIGH_ENGAGEMENT_THRESHOLD,
        }
    }

    /// Set the number of unseen claims verified per cycle
    pub fn with_batch_limit(mut self, batch_limit: usize) -> Self {
        self.batch_limit = batch_limit;
        self
    }

    /// Set the engagement threshold for high-engagement reporting
    pub fn with_high_engagement_threshold(mut self, threshold: u64) -> Self {
        self.high_engagement_threshold = threshold;
        self
    }

    /// Start from an existing tracker
    pub fn with_tracker(mut self, tracker: DedupTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// Current state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Processed-claim tracker
    pub fn tracker(&self) -> &DedupTracker {
        &self.tracker
    }

    /// Accumulated metrics
    pub fn metrics(&self) -> &AgentMetrics {
        &self.metrics
    }

    /// Reset the metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Claim sink
    pub fn sink(&self) -> &Snk {
        &self.sink
    }

    /// Enter the terminal state
    pub fn stop(&mut self) {
        self.transition(CycleState::Stopped);
    }

    /// Run one verification cycle
    ///
    /// Never fails; transport problems are reported through the outcome and
    /// the log.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let cycle_id = Uuid::now_v7();

        if self.state == CycleState::Stopped {
            debug!(%cycle_id, "Orchestrator stopped, not running cycle");
            return CycleOutcome::Skipped {
                cycle_id,
                reason: SkipReason::Stopped,
            };
        }

        let started = Instant::now();
        info!(%cycle_id, "Starting verification cycle");
        let outcome = self.execute(cycle_id).await;
        self.metrics
            .record_runtime(started.elapsed().as_millis() as u64);
        self.transition(CycleState::Idle);

        outcome
    }

    async fn execute(&mut self, cycle_id: Uuid) -> CycleOutcome {
        self.transition(CycleState::Fetching);
        let claims = match self.source.fetch_claims().await {
            Ok(claims) => claims,
            Err(e) => {
                warn!(%cycle_id, "Could not fetch claims: {}", e);
                self.metrics.record_fetch_failure();
                return CycleOutcome::Skipped {
                    cycle_id,
                    reason: SkipReason::FetchFailed(e.to_string()),
                };
            }
        };

        info!(%cycle_id, "Fetched {} claims", claims.len());
        if claims.is_empty() {
            info!(%cycle_id, "No claims to process");
            self.metrics.record_skip();
            return CycleOutcome::Skipped {
                cycle_id,
                reason: SkipReason::EmptyBatch,
            };
        }
        self.metrics.record_fetch(claims.len());

        self.transition(CycleState::Analyzing);
        let trends = TrendReport::analyze(
            &self.engine,
            &claims,
            self.high_engagement_threshold,
            Utc::now(),
        );
        self.metrics.record_detection(trends.detected_misinformation);
        info!(
            %cycle_id,
            "Trend analysis: {} of {} claims flagged, {} high-engagement, topics: {:?}",
            trends.detected_misinformation,
            trends.total_claims,
            trends.high_engagement_false.len(),
            trends.emerging_topics
        );

        self.transition(CycleState::Verifying);
        let verified = self.verify_batch(&claims);

        self.transition(CycleState::Aggregating);
        let update = dashboard::build_update(verified, Utc::now());

        self.transition(CycleState::Publishing);
        let published = match self.sink.publish(&update).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%cycle_id, "Could not send dashboard update: {}", e);
                false
            }
        };

        for result in &update.verification_results {
            info!(%cycle_id, claim_id = %result.claim_id, "{}", result.summary);
        }
        info!(
            %cycle_id,
            "Cycle complete: {} verified, {} alerts, average trust score {}",
            update.stats.total_processed,
            update.alerts.len(),
            update.stats.average_trust_score
        );

        self.metrics.record_cycle(
            update.verification_results.len(),
            update.alerts.len(),
            published,
        );

        CycleOutcome::Completed(CycleReport {
            cycle_id,
            trends,
            update,
            published,
        })
    }

    /// Verify the first unseen claims in fetch order, up to the batch limit
    fn verify_batch(&mut self, claims: &[Claim]) -> Vec<VerifiedClaim> {
        let mut verified = Vec::new();

        for claim in claims {
            if verified.len() >= self.batch_limit {
                break;
            }
            if self.tracker.has_processed(claim.id) {
                continue;
            }

            let verification =
                self.engine
                    .verify_claim(claim.id, &claim.text, self.trusted_sources.as_slice());
            let summary = self.engine.generate_summary(&claim.text, &verification);
            self.tracker.mark_processed(claim.id);

            verified.push(VerifiedClaim {
                claim_id: claim.id,
                claim_text: claim.text.clone(),
                verification,
                summary,
            });
        }

        verified
    }

    fn transition(&mut self, next: CycleState) {
        debug!("Cycle state: {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use echoshield_analysis::ScriptedScorer;
    use echoshield_domain::{AlertSeverity, ClaimId, VerificationStatus};
    use std::sync::{Arc, Mutex};

    // Mock source returning the same batch every time
    struct FixedSource {
        claims: Vec<Claim>,
    }

    #[async_trait]
    impl ClaimSource for FixedSource {
        type Error = String;

        async fn fetch_claims(&self) -> Result<Vec<Claim>, Self::Error> {
            Ok(self.claims.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ClaimSource for FailingSource {
        type Error = String;

        async fn fetch_claims(&self) -> Result<Vec<Claim>, Self::Error> {
            Err("connection refused".to_string())
        }
    }

    // Mock sink recording every update
    #[derive(Default)]
    struct RecordingSink {
        updates: Arc<Mutex<Vec<DashboardUpdate>>>,
        reject: bool,
    }

    #[async_trait]
    impl DashboardSink for RecordingSink {
        type Error = String;

        async fn publish(&self, update: &DashboardUpdate) -> Result<(), Self::Error> {
            self.updates.lock().unwrap().push(update.clone());
            if self.reject {
                Err("503 Service Unavailable".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn claim(id: i64, text: &str) -> Claim {
        Claim::new(id, text, "Twitter", Utc::now(), 100, "Other")
    }

    fn orchestrator<Src: ClaimSource>(
        source: Src,
        sink: RecordingSink,
        scorer: ScriptedScorer,
    ) -> Orchestrator<Src, RecordingSink, ScriptedScorer> {
        Orchestrator::new(
            source,
            sink,
            AnalysisEngine::new(scorer),
            TrustedSources::default(),
        )
    }

    fn verified_ids(outcome: &CycleOutcome) -> Vec<i64> {
        outcome
            .report()
            .map(|r| {
                r.update
                    .verification_results
                    .iter()
                    .map(|v| v.claim_id.value())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_batch_limited_to_first_unseen() {
        let claims = (1..=5).map(|id| claim(id, "Election turnout was high")).collect();
        let mut tracker = DedupTracker::new();
        tracker.mark_processed(ClaimId::new(2));

        let mut orch = orchestrator(
            FixedSource { claims },
            RecordingSink::default(),
            ScriptedScorer::new(80),
        )
        .with_tracker(tracker);

        let first = orch.run_cycle().await;
        assert_eq!(verified_ids(&first), vec![1, 3, 4]);

        let second = orch.run_cycle().await;
        assert_eq!(verified_ids(&second), vec![5]);

        let third = orch.run_cycle().await;
        assert!(verified_ids(&third).is_empty());
        assert!(!third.is_skipped());

        assert_eq!(orch.tracker().len(), 5);
        assert_eq!(orch.sink().updates.lock().unwrap().len(), 3);
        assert_eq!(orch.metrics().claims_verified, 4);
    }

    #[tokio::test]
    async fn test_duplicate_ids_in_batch_verified_once() {
        let claims = vec![claim(7, "first"), claim(7, "again"), claim(8, "other")];
        let mut orch = orchestrator(
            FixedSource { claims },
            RecordingSink::default(),
            ScriptedScorer::new(80),
        );

        let outcome = orch.run_cycle().await;
        assert_eq!(verified_ids(&outcome), vec![7, 8]);
    }

    #[tokio::test]
    async fn test_empty_fetch_skips_publish() {
        let mut orch = orchestrator(
            FixedSource { claims: Vec::new() },
            RecordingSink::default(),
            ScriptedScorer::new(80),
        );

        let outcome = orch.run_cycle().await;
        match outcome {
            CycleOutcome::Skipped { reason, .. } => assert_eq!(reason, SkipReason::EmptyBatch),
            other => panic!("Expected skipped cycle, got {:?}", other),
        }
        assert!(orch.sink().updates.lock().unwrap().is_empty());
        assert!(orch.tracker().is_empty());
        assert_eq!(orch.state(), CycleState::Idle);
        assert_eq!(orch.metrics().cycles_skipped, 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_not_fatal() {
        let mut orch = orchestrator(FailingSource, RecordingSink::default(), ScriptedScorer::new(80));

        let outcome = orch.run_cycle().await;
        match outcome {
            CycleOutcome::Skipped { reason, .. } => {
                assert_eq!(reason, SkipReason::FetchFailed("connection refused".to_string()))
            }
            other => panic!("Expected skipped cycle, got {:?}", other),
        }
        assert!(orch.sink().updates.lock().unwrap().is_empty());
        assert_eq!(orch.metrics().fetch_failures, 1);
        assert_eq!(orch.state(), CycleState::Idle);
    }

    #[tokio::test]
    async fn test_publish_failure_still_marks_claims() {
        let sink = RecordingSink {
            reject: true,
            ..Default::default()
        };
        let mut orch = orchestrator(
            FixedSource {
                claims: vec![claim(1, "a"), claim(2, "b")],
            },
            sink,
            ScriptedScorer::new(80),
        );

        let first = orch.run_cycle().await;
        let report = first.report().unwrap();
        assert!(!report.published);
        assert_eq!(orch.metrics().publish_failures, 1);
        assert!(orch.tracker().has_processed(ClaimId::new(1)));

        // Already-marked claims are not retried
        let second = orch.run_cycle().await;
        assert!(verified_ids(&second).is_empty());
    }

    #[tokio::test]
    async fn test_update_carries_stats_and_alerts() {
        let claims = vec![
            claim(1, "Vaccine microchip rumor"),
            claim(2, "Renewable output doubled"),
            claim(3, "Water boils at 100C at sea level"),
        ];
        let mut orch = orchestrator(
            FixedSource { claims },
            RecordingSink::default(),
            ScriptedScorer::new(80).with_truth_scores([10, 60, 90]),
        );

        let outcome = orch.run_cycle().await;
        let report = outcome.report().unwrap();
        let update = &report.update;

        assert_eq!(update.stats.total_processed, 3);
        assert_eq!(update.stats.average_trust_score, 53.33);
        assert_eq!(update.alerts.len(), 2);
        assert_eq!(update.alerts[0].severity, AlertSeverity::High);
        assert_eq!(update.alerts[1].severity, AlertSeverity::Medium);
        assert_eq!(
            update.verification_results[0].verification.status,
            VerificationStatus::Misinformation
        );
        assert!(update.verification_results[2].summary.starts_with("✅ VERIFIED"));
        assert_eq!(report.trends.detected_misinformation, 1);
    }

    #[tokio::test]
    async fn test_stopped_orchestrator_skips() {
        let mut orch = orchestrator(
            FixedSource {
                claims: vec![claim(1, "a")],
            },
            RecordingSink::default(),
            ScriptedScorer::new(80),
        );
        orch.stop();

        let outcome = orch.run_cycle().await;
        assert!(matches!(
            outcome,
            CycleOutcome::Skipped {
                reason: SkipReason::Stopped,
                ..
            }
        ));
        assert_eq!(orch.state(), CycleState::Stopped);
        assert!(orch.tracker().is_empty());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(CycleState::Idle.to_string(), "idle");
        assert_eq!(CycleState::Publishing.to_string(), "publishing");
        assert_eq!(CycleState::Stopped.to_string(), "stopped");
    }
}
