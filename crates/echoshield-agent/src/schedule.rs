//! Scheduling primitives: an injectable clock and a shutdown signal
//!
//! The worker sleeps through a [`Clock`] so tests can run cycles without
//! real delays, and stops when a [`Shutdown`] handle is triggered.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Source of inter-cycle delays
#[async_trait]
pub trait Clock: Send + Sync {
    /// Wait for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Create a linked shutdown handle and signal
///
/// # Examples
///
/// ```
/// use echoshield_agent::schedule::shutdown_channel;
///
/// let (shutdown, signal) = shutdown_channel();
/// assert!(!signal.is_triggered());
/// shutdown.trigger();
/// assert!(signal.is_triggered());
/// ```
pub fn shutdown_channel() -> (Shutdown, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (Shutdown { tx: Arc::new(tx) }, ShutdownSignal { rx })
}

/// Handle used to request a stop
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    /// Request a stop; repeated calls are no-ops
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Receiving side of a shutdown request
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Whether a stop has been requested
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once a stop is requested
    ///
    /// Never resolves if every [`Shutdown`] handle is dropped without
    /// triggering.
    pub async fn triggered(&mut self) {
        while !*self.rx.borrow_and_update() {
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
