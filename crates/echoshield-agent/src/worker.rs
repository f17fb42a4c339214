//! Background worker for continuous verification

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::metrics::AgentMetrics;
use crate::orchestrator::{CycleOutcome, Orchestrator};
use crate::schedule::{Clock, ShutdownSignal, TokioClock};
use echoshield_analysis::{AnalysisEngine, RandomScorer};
use echoshield_client::BackendClient;
use echoshield_domain::traits::{ClaimSource, DashboardSink, Scorer};
use std::time::Duration;

/// Worker wired to the HTTP claim store with random scoring
pub type HttpAgentWorker = AgentWorker<BackendClient, BackendClient, RandomScorer, TokioClock>;

/// Background worker that runs verification cycles on a schedule
///
/// Cycles run back to back with a fixed sleep in between. A shutdown request
/// is honored before a cycle starts or while sleeping, never mid-cycle.
///
/// # Examples
///
/// ```no_run
/// use echoshield_agent::schedule::shutdown_channel;
/// use echoshield_agent::{AgentConfig, HttpAgentWorker};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AgentConfig::default();
///     let mut worker = HttpAgentWorker::from_config(&config)?;
///
///     let (shutdown, signal) = shutdown_channel();
///     tokio::spawn(async move {
///         let _ = tokio::signal::ctrl_c().await;
///         shutdown.trigger();
///     });
///
///     worker.run(signal).await;
///     Ok(())
/// }
/// ```
pub struct AgentWorker<Src, Snk, Sc, C = TokioClock> {
    orchestrator: Orchestrator<Src, Snk, Sc>,
    interval: Duration,
    clock: C,
}

impl HttpAgentWorker {
    /// Build a worker against the configured claim store
    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        config.validate()?;

        let client = BackendClient::with_timeout(&config.backend_url, config.request_timeout())?;
        let orchestrator = Orchestrator::new(
            client.clone(),
            client,
            AnalysisEngine::new(RandomScorer::new()),
            config.trusted_source_registry()?,
        )
        .with_batch_limit(config.batch_limit)
        .with_high_engagement_threshold(config.high_engagement_threshold);

        Ok(Self::new(orchestrator, config.update_interval()))
    }
}

impl<Src, Snk, Sc> AgentWorker<Src, Snk, Sc, TokioClock>
where
    Src: ClaimSource,
    Snk: DashboardSink,
    Sc: Scorer,
{
    /// Create a worker sleeping on the tokio timer
    pub fn new(orchestrator: Orchestrator<Src, Snk, Sc>, interval: Duration) -> Self {
        Self::with_clock(orchestrator, interval, TokioClock)
    }
}

impl<Src, Snk, Sc, C> AgentWorker<Src, Snk, Sc, C>
where
    Src: ClaimSource,
    Snk: DashboardSink,
    Sc: Scorer,
    C: Clock,
{
    /// Create a worker with a custom clock
    pub fn with_clock(orchestrator: Orchestrator<Src, Snk, Sc>, interval: Duration, clock: C) -> Self {
        Self {
            orchestrator,
            interval,
            clock,
        }
    }

    /// Run cycles until shutdown is requested
    ///
    /// Leaves the orchestrator in the stopped state.
    pub async fn run(&mut self, mut shutdown: ShutdownSignal) {
        tracing::info!("Verification agent started (interval: {:?})", self.interval);

        while !shutdown.is_triggered() {
            self.orchestrator.run_cycle().await;

            tokio::select! {
                _ = self.clock.sleep(self.interval) => {}
                _ = shutdown.triggered() => {}
            }
        }

        tracing::info!("Shutdown signal received, stopping agent");
        self.orchestrator.stop();

        tracing::info!("Agent stopped. Final metrics:\n{}", self.metrics().summary());
    }

    /// Run a fixed number of cycles, sleeping between them
    ///
    /// Returns the outcome of every cycle in order.
    pub async fn run_cycles(&mut self, cycles: usize) -> Vec<CycleOutcome> {
        tracing::info!(
            "Verification agent started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        let mut outcomes = Vec::with_capacity(cycles);
        for cycle in 0..cycles {
            if cycle > 0 {
                self.clock.sleep(self.interval).await;
            }

            tracing::debug!("Starting cycle {}/{}", cycle + 1, cycles);
            outcomes.push(self.orchestrator.run_cycle().await);
        }

        tracing::info!(
            "Agent finished {} cycles. Final metrics:\n{}",
            cycles,
            self.metrics().summary()
        );

        outcomes
    }

    /// Get a reference to the orchestrator
    pub fn orchestrator(&self) -> &Orchestrator<Src, Snk, Sc> {
        &self.orchestrator
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &AgentMetrics {
        self.orchestrator.metrics()
    }

    /// Reset the metrics counters
    pub fn reset_metrics(&mut self) {
        self.orchestrator.reset_metrics();
    }
}
