//! Metrics collection for verification cycles

/// Metrics collected while the agent runs
///
/// Tracks cycle outcomes, claim throughput and transport failures.
#[derive(Debug, Clone, Default)]
pub struct AgentMetrics {
    /// Cycles that reached the publishing step
    pub cycles_completed: usize,

    /// Cycles that stopped early (empty or failed fetch)
    pub cycles_skipped: usize,

    /// Fetches that failed with a transport error
    pub fetch_failures: usize,

    /// Claims received from the store across all cycles
    pub claims_fetched: usize,

    /// Claims verified across all cycles
    pub claims_verified: usize,

    /// Claims flagged by trend detection across all cycles
    pub misinformation_detected: usize,

    /// Alerts raised across all cycles
    pub alerts_raised: usize,

    /// Publishes rejected or unreachable
    pub publish_failures: usize,

    /// Total time spent inside cycles in milliseconds
    pub total_runtime_ms: u64,
}

impl AgentMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record claims received from a fetch
    pub fn record_fetch(&mut self, count: usize) {
        self.claims_fetched += count;
    }

    /// Record a failed fetch; the cycle counts as skipped
    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
        self.cycles_skipped += 1;
    }

    /// Record a cycle that had nothing to do
    pub fn record_skip(&mut self) {
        self.cycles_skipped += 1;
    }

    /// Record trend detection results
    pub fn record_detection(&mut self, flagged: usize) {
        self.misinformation_detected += flagged;
    }

    /// Record a completed cycle
    pub fn record_cycle(&mut self, verified: usize, alerts: usize, published: bool) {
        self.cycles_completed += 1;
        self.claims_verified += verified;
        self.alerts_raised += alerts;
        if !published {
            self.publish_failures += 1;
        }
    }

    /// Add elapsed cycle time
    pub fn record_runtime(&mut self, elapsed_ms: u64) {
        self.total_runtime_ms += elapsed_ms;
    }

    /// Total cycles attempted
    pub fn total_cycles(&self) -> usize {
        self.cycles_completed + self.cycles_skipped
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let lines = [
            "Agent Metrics Summary".to_string(),
            "=====================".to_string(),
            format!(
                "Cycles: {} completed, {} skipped",
                self.cycles_completed, self.cycles_skipped
            ),
            format!("Total runtime: {}ms", self.total_runtime_ms),
            String::new(),
            format!("Claims fetched: {}", self.claims_fetched),
            format!("Claims verified: {}", self.claims_verified),
            format!("Misinformation detected: {}", self.misinformation_detected),
            format!("Alerts raised: {}", self.alerts_raised),
            String::new(),
            format!("Fetch failures: {}", self.fetch_failures),
            format!("Publish failures: {}", self.publish_failures),
        ];

        lines.join("\n")
    }
}
