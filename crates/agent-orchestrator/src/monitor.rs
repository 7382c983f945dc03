//! Shared monitor contract and per-monitor scheduling.
//!
//! Each monitor runs on its own tokio task with a sleep-then-repeat loop, so
//! cadences drift independently and a failure in one never touches another.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::Alert;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wallet_core::WalletError;

use crate::error::AgentError;

/// Delay before retrying after a failed check cycle, instead of the normal
/// interval, so we don't hot-loop against a failing data source.
pub(crate) const FALLBACK_DELAY: Duration = Duration::from_secs(60);

/// One category of periodic wallet-condition detection.
///
/// `check` performs a single poll-compare-emit pass. Comparison baselines are
/// private to the implementing struct; they are initialized empty when the
/// runner starts and dropped when it stops.
#[async_trait]
pub trait Monitor: Send {
    fn name(&self) -> &str;
    fn interval(&self) -> Duration;
    async fn check(&mut self) -> Result<Vec<Alert>, WalletError>;
}

/// Ingestion point for alerts raised by monitors. Implemented by the
/// orchestrator; safe to call concurrently from several monitor tasks.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn handle(&self, alert: Alert);
}

type MonitorFactory = Box<dyn Fn() -> Box<dyn Monitor> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
    Stopped,
}

/// Owns the background task for one monitor.
///
/// State machine: Idle -> Running -> Stopped, with restart allowed from
/// Stopped. A fresh monitor instance is built on every `start`, so baselines
/// never survive a stop.
pub struct MonitorRunner {
    name: String,
    factory: MonitorFactory,
    sink: Arc<dyn AlertSink>,
    state: RunState,
    stop_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl MonitorRunner {
    pub fn new(
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Monitor> + Send + Sync + 'static,
        sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            name: name.into(),
            factory: Box::new(factory),
            sink,
            state: RunState::Idle,
            stop_tx: None,
            task: None,
        }
    }

    /// Begin periodic execution. The first cycle runs immediately, not after
    /// the first interval.
    pub fn start(&mut self) -> Result<(), AgentError> {
        if self.state == RunState::Running {
            return Err(AgentError::AlreadyRunning(self.name.clone()));
        }

        let monitor = (self.factory)();
        let sink = Arc::clone(&self.sink);
        let (stop_tx, stop_rx) = watch::channel(false);

        self.task = Some(tokio::spawn(run_loop(monitor, sink, stop_rx)));
        self.stop_tx = Some(stop_tx);
        self.state = RunState::Running;
        Ok(())
    }

    /// Signal cooperative termination. Idempotent. Does not interrupt an
    /// in-flight cycle; it only prevents the next one from starting.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
            self.state = RunState::Stopped;
        }
        self.task = None;
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

async fn run_loop(
    mut monitor: Box<dyn Monitor>,
    sink: Arc<dyn AlertSink>,
    mut stop_rx: watch::Receiver<bool>,
) {
    tracing::info!(monitor = monitor.name(), "monitor started");

    loop {
        if *stop_rx.borrow() {
            break;
        }

        let delay = match monitor.check().await {
            Ok(alerts) => {
                for alert in alerts {
                    sink.handle(alert).await;
                }
                monitor.interval()
            }
            Err(e) => {
                tracing::warn!(
                    monitor = monitor.name(),
                    "check failed: {e}; retrying in {}s",
                    FALLBACK_DELAY.as_secs()
                );
                FALLBACK_DELAY
            }
        };

        // Only the inter-cycle sleep races the stop signal; a cycle that has
        // begun always runs to completion.
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = stop_rx.changed() => {}
        }
    }

    tracing::info!(monitor = monitor.name(), "monitor stopped");
}
