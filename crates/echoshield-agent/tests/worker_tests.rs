//! Worker scheduling tests with in-memory collaborators and a manual clock

use async_trait::async_trait;
use chrono::Utc;
use echoshield_agent::schedule::{shutdown_channel, Clock, Shutdown};
use echoshield_agent::{AgentWorker, CycleState, DedupTracker, Orchestrator, SkipReason};
use echoshield_analysis::{AnalysisEngine, ScriptedScorer};
use echoshield_domain::traits::{ClaimSource, DashboardSink};
use echoshield_domain::{Claim, ClaimId, DashboardUpdate, TrustedSources};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const INTERVAL: Duration = Duration::from_secs(60);

/// Source that replays scripted fetch results, then repeats the last batch
struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<Claim>, String>>>,
    fallback: Vec<Claim>,
}

impl ScriptedSource {
    fn new(script: Vec<Result<Vec<Claim>, String>>, fallback: Vec<Claim>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
        }
    }

    fn repeating(claims: Vec<Claim>) -> Self {
        Self::new(Vec::new(), claims)
    }
}

#[async_trait]
impl ClaimSource for ScriptedSource {
    type Error = String;

    async fn fetch_claims(&self) -> Result<Vec<Claim>, Self::Error> {
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

#[derive(Clone, Default)]
struct SharedSink {
    updates: Arc<Mutex<Vec<DashboardUpdate>>>,
}

#[async_trait]
impl DashboardSink for SharedSink {
    type Error = String;

    async fn publish(&self, update: &DashboardUpdate) -> Result<(), Self::Error> {
        self.updates.lock().unwrap().push(update.clone());
        Ok(())
    }
}

/// Clock that returns immediately and records every requested sleep
///
/// Optionally requests shutdown once a number of sleeps has been reached.
#[derive(Clone, Default)]
struct ManualClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
    stop_after: Option<(usize, Shutdown)>,
}

#[async_trait]
impl Clock for ManualClock {
    async fn sleep(&self, duration: Duration) {
        let count = {
            let mut sleeps = self.sleeps.lock().unwrap();
            sleeps.push(duration);
            sleeps.len()
        };
        if let Some((limit, shutdown)) = &self.stop_after {
            if count >= *limit {
                shutdown.trigger();
            }
        }
    }
}

fn claim(id: i64, text: &str, engagement: u64) -> Claim {
    Claim::new(id, text, "Twitter", Utc::now(), engagement, "Other")
}

fn sample_claims() -> Vec<Claim> {
    vec![
        claim(1, "A new vaccine causes autism spectrum disorders", 15234),
        claim(2, "Climate change is accelerating faster than predicted", 8932),
        claim(3, "5G technology causes COVID-19 infections", 42156),
        claim(4, "AI models can now pass medical licensing exams", 3421),
        claim(5, "Election results were certified in all districts", 1200),
    ]
}

fn verified_ids(update: &DashboardUpdate) -> Vec<i64> {
    update
        .verification_results
        .iter()
        .map(|r| r.claim_id.value())
        .collect()
}

fn worker(
    source: ScriptedSource,
    sink: SharedSink,
    clock: ManualClock,
) -> AgentWorker<ScriptedSource, SharedSink, ScriptedScorer, ManualClock> {
    let orchestrator = Orchestrator::new(
        source,
        sink,
        AnalysisEngine::new(ScriptedScorer::new(80)),
        TrustedSources::default(),
    );
    AgentWorker::with_clock(orchestrator, INTERVAL, clock)
}

#[tokio::test]
async fn test_unseen_claims_spread_over_cycles() {
    let sink = SharedSink::default();
    let clock = ManualClock::default();

    let mut tracker = DedupTracker::new();
    tracker.mark_processed(ClaimId::new(2));

    let orchestrator = Orchestrator::new(
        ScriptedSource::repeating(sample_claims()),
        sink.clone(),
        AnalysisEngine::new(ScriptedScorer::new(80)),
        TrustedSources::default(),
    )
    .with_tracker(tracker);
    let mut worker = AgentWorker::with_clock(orchestrator, INTERVAL, clock.clone());

    let outcomes = worker.run_cycles(2).await;
    assert_eq!(outcomes.len(), 2);

    let updates = sink.updates.lock().unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(verified_ids(&updates[0]), vec![1, 3, 4]);
    assert_eq!(verified_ids(&updates[1]), vec![5]);

    // One sleep between two cycles, none after the last
    assert_eq!(*clock.sleeps.lock().unwrap(), vec![INTERVAL]);

    let report = outcomes[0].report().unwrap();
    assert_eq!(report.trends.total_claims, 5);
    assert_eq!(report.trends.detected_misinformation, 2);
    assert_eq!(report.trends.high_engagement_false.len(), 2);
    assert_eq!(worker.metrics().claims_verified, 4);
    assert_eq!(worker.orchestrator().state(), CycleState::Idle);
}

#[tokio::test]
async fn test_transport_failures_do_not_stop_the_worker() {
    let sink = SharedSink::default();
    let source = ScriptedSource::new(
        vec![Err("connection refused".to_string()), Ok(Vec::new())],
        sample_claims(),
    );
    let mut worker = worker(source, sink.clone(), ManualClock::default());

    let outcomes = worker.run_cycles(3).await;

    assert!(matches!(
        outcomes[0].clone(),
        echoshield_agent::CycleOutcome::Skipped {
            reason: SkipReason::FetchFailed(_),
            ..
        }
    ));
    assert!(matches!(
        outcomes[1].clone(),
        echoshield_agent::CycleOutcome::Skipped {
            reason: SkipReason::EmptyBatch,
            ..
        }
    ));
    assert!(!outcomes[2].is_skipped());

    // Only the successful cycle published
    assert_eq!(sink.updates.lock().unwrap().len(), 1);
    assert_eq!(worker.metrics().cycles_skipped, 2);
    assert_eq!(worker.metrics().cycles_completed, 1);
    assert_eq!(worker.metrics().fetch_failures, 1);
}

#[tokio::test]
async fn test_run_stops_between_cycles_on_shutdown() {
    let (shutdown, signal) = shutdown_channel();
    let sink = SharedSink::default();
    let clock = ManualClock {
        sleeps: Arc::default(),
        stop_after: Some((2, shutdown)),
    };
    let mut worker = worker(
        ScriptedSource::repeating(sample_claims()),
        sink.clone(),
        clock.clone(),
    );

    worker.run(signal).await;

    // Shutdown arrived during the second sleep, so exactly two cycles ran
    assert_eq!(sink.updates.lock().unwrap().len(), 2);
    assert_eq!(clock.sleeps.lock().unwrap().len(), 2);
    assert_eq!(worker.metrics().cycles_completed, 2);
    assert_eq!(worker.orchestrator().state(), CycleState::Stopped);
}

#[tokio::test]
async fn test_shutdown_before_start_runs_nothing() {
    let (shutdown, signal) = shutdown_channel();
    shutdown.trigger();

    let sink = SharedSink::default();
    let mut worker = worker(
        ScriptedSource::repeating(sample_claims()),
        sink.clone(),
        ManualClock::default(),
    );

    worker.run(signal).await;

    assert!(sink.updates.lock().unwrap().is_empty());
    assert_eq!(worker.metrics().total_cycles(), 0);
    assert_eq!(worker.orchestrator().state(), CycleState::Stopped);
}

#[tokio::test]
async fn test_stopped_worker_skips_further_cycles() {
    let (shutdown, signal) = shutdown_channel();
    shutdown.trigger();

    let sink = SharedSink::default();
    let mut worker = worker(
        ScriptedSource::repeating(sample_claims()),
        sink.clone(),
        ManualClock::default(),
    );
    worker.run(signal).await;

    let outcomes = worker.run_cycles(1).await;
    assert!(matches!(
        outcomes[0].clone(),
        echoshield_agent::CycleOutcome::Skipped {
            reason: SkipReason::Stopped,
            ..
        }
    ));
    assert!(sink.updates.lock().unwrap().is_empty());
}
