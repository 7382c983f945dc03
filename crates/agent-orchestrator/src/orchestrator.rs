//! Wallet-level coordination of the six monitors.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::{Alert, NotificationTransport};
use tokio::sync::Mutex;
use wallet_core::WalletDataProvider;

use crate::error::AgentError;
use crate::history::AlertHistory;
use crate::monitor::{AlertSink, MonitorRunner};
use crate::monitors::{
    AutoRebalancer, IdleAssetMonitor, OpportunityScout, PriceMovementMonitor, RiskMonitor,
    YieldHarvester,
};
use crate::router::NotificationRouter;
use crate::settings::{AgentSettings, SettingsUpdate, SharedSettings};

/// Per-monitor cycle cadences. The defaults match production; tests shrink
/// them to milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct MonitorIntervals {
    pub idle_assets: Duration,
    pub opportunity_scout: Duration,
    pub risk: Duration,
    pub rebalancer: Duration,
    pub harvester: Duration,
    pub price_movement: Duration,
}

impl Default for MonitorIntervals {
    fn default() -> Self {
        Self {
            idle_assets: Duration::from_secs(5 * 60),
            opportunity_scout: Duration::from_secs(5 * 60),
            risk: Duration::from_secs(10 * 60),
            rebalancer: Duration::from_secs(60 * 60),
            harvester: Duration::from_secs(60 * 60),
            price_movement: Duration::from_secs(5 * 60),
        }
    }
}

/// Alert intake shared by every monitor task.
///
/// `handle` holds the history lock across both the append and the channel
/// dispatch, so concurrently raised alerts land in history and on the wire
/// in the same order.
pub struct OrchestratorCore {
    history: Mutex<AlertHistory>,
    settings: SharedSettings,
    router: NotificationRouter,
}

#[async_trait]
impl AlertSink for OrchestratorCore {
    async fn handle(&self, alert: Alert) {
        let mut history = self.history.lock().await;
        tracing::info!(
            kind = alert.kind.as_str(),
            priority = %alert.priority,
            "{}",
            alert.title
        );
        history.push(alert.clone());

        let settings = self.settings.snapshot().await;
        self.router.dispatch(&alert, &settings).await;
    }
}

/// Runs the full monitor set for one wallet.
///
/// Activation spins up all six monitor tasks; deactivation signals each to
/// stop after its in-flight cycle. The core sink outlives deactivation, so a
/// straggling cycle can still record its alerts.
pub struct AgentOrchestrator {
    wallet_id: String,
    provider: Arc<dyn WalletDataProvider>,
    intervals: MonitorIntervals,
    core: Arc<OrchestratorCore>,
    runners: Mutex<Vec<MonitorRunner>>,
}

impl AgentOrchestrator {
    pub fn new(
        wallet_id: impl Into<String>,
        provider: Arc<dyn WalletDataProvider>,
        settings: AgentSettings,
        transport: Arc<dyn NotificationTransport>,
    ) -> Self {
        let core = Arc::new(OrchestratorCore {
            history: Mutex::new(AlertHistory::new()),
            settings: SharedSettings::new(settings),
            router: NotificationRouter::new(transport),
        });

        Self {
            wallet_id: wallet_id.into(),
            provider,
            intervals: MonitorIntervals::default(),
            core,
            runners: Mutex::new(Vec::new()),
        }
    }

    pub fn with_intervals(mut self, intervals: MonitorIntervals) -> Self {
        self.intervals = intervals;
        self
    }

    /// Start all six monitors. Fails without side effects if any are already
    /// running.
    pub async fn activate_all(&self) -> Result<(), AgentError> {
        let mut runners = self.runners.lock().await;
        if runners.iter().any(MonitorRunner::is_running) {
            return Err(AgentError::AlreadyActive);
        }

        *runners = self.build_runners();
        for runner in runners.iter_mut() {
            runner.start()?;
        }

        tracing::info!(wallet = %self.wallet_id, "all agents activated");
        Ok(())
    }

    /// Signal every monitor to stop. Idempotent; in-flight cycles finish.
    pub async fn deactivate_all(&self) {
        let mut runners = self.runners.lock().await;
        for runner in runners.iter_mut() {
            runner.stop();
        }
        tracing::info!(wallet = %self.wallet_id, "all agents deactivated");
    }

    pub async fn is_active(&self) -> bool {
        self.runners
            .lock()
            .await
            .iter()
            .any(MonitorRunner::is_running)
    }

    /// The last `limit` recorded alerts, oldest of the window first.
    pub async fn recent_alerts(&self, limit: usize) -> Vec<Alert> {
        self.core.history.lock().await.recent(limit)
    }

    pub async fn alert_count(&self) -> usize {
        self.core.history.lock().await.len()
    }

    /// Apply a partial settings change. Running monitors pick it up at their
    /// next cycle; no restart needed.
    pub async fn update_settings(&self, update: SettingsUpdate) {
        self.core.settings.apply(update).await;
    }

    pub async fn settings(&self) -> AgentSettings {
        self.core.settings.snapshot().await
    }

    /// The shared intake for monitor alerts. Exposed so callers can inject
    /// alerts from outside the monitor set.
    pub fn alert_sink(&self) -> Arc<dyn AlertSink> {
        Arc::clone(&self.core) as Arc<dyn AlertSink>
    }

    fn build_runners(&self) -> Vec<MonitorRunner> {
        let sink = Arc::clone(&self.core) as Arc<dyn AlertSink>;
        let intervals = self.intervals;

        let idle = {
            let wallet_id = self.wallet_id.clone();
            let provider = Arc::clone(&self.provider);
            MonitorRunner::new(
                "Idle Asset Monitor",
                move || {
                    Box::new(
                        IdleAssetMonitor::new(wallet_id.clone(), Arc::clone(&provider))
                            .with_interval(intervals.idle_assets),
                    )
                },
                Arc::clone(&sink),
            )
        };

        let scout = {
            let provider = Arc::clone(&self.provider);
            MonitorRunner::new(
                "Opportunity Scout",
                move || {
                    Box::new(
                        OpportunityScout::new(Arc::clone(&provider))
                            .with_interval(intervals.opportunity_scout),
                    )
                },
                Arc::clone(&sink),
            )
        };

        let risk = {
            let wallet_id = self.wallet_id.clone();
            let provider = Arc::clone(&self.provider);
            MonitorRunner::new(
                "Risk Monitor",
                move || {
                    Box::new(
                        RiskMonitor::new(wallet_id.clone(), Arc::clone(&provider))
                            .with_interval(intervals.risk),
                    )
                },
                Arc::clone(&sink),
            )
        };

        let rebalancer = {
            let wallet_id = self.wallet_id.clone();
            let provider = Arc::clone(&self.provider);
            let settings = self.core.settings.clone();
            MonitorRunner::new(
                "Auto Rebalancer",
                move || {
                    Box::new(
                        AutoRebalancer::new(
                            wallet_id.clone(),
                            Arc::clone(&provider),
                            settings.clone(),
                        )
                        .with_interval(intervals.rebalancer),
                    )
                },
                Arc::clone(&sink),
            )
        };

        let harvester = {
            let wallet_id = self.wallet_id.clone();
            let provider = Arc::clone(&self.provider);
            MonitorRunner::new(
                "Yield Harvester",
                move || {
                    Box::new(
                        YieldHarvester::new(wallet_id.clone(), Arc::clone(&provider))
                            .with_interval(intervals.harvester),
                    )
                },
                Arc::clone(&sink),
            )
        };

        let price = {
            let provider = Arc::clone(&self.provider);
            MonitorRunner::new(
                "Price Movement Monitor",
                move || {
                    Box::new(
                        PriceMovementMonitor::new(Arc::clone(&provider))
                            .with_interval(intervals.price_movement),
                    )
                },
                sink,
            )
        };

        vec![idle, scout, risk, rebalancer, harvester, price]
    }
}
