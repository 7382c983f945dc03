use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::{Alert, AlertKind, AlertPriority};
use wallet_core::{RiskBucket, WalletDataProvider, WalletError};

use crate::monitor::Monitor;
use crate::settings::SharedSettings;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Allocation drift that triggers a rebalance suggestion.
const DRIFT_THRESHOLD: f64 = 0.10;

/// Watches portfolio allocation drift against the wallet's target.
///
/// The target is read from the orchestrator-held settings at every cycle
/// start, so a risk-tolerance change takes effect on the next cycle without
/// a restart.
pub struct AutoRebalancer {
    wallet_id: String,
    provider: Arc<dyn WalletDataProvider>,
    settings: SharedSettings,
    interval: Duration,
}

impl AutoRebalancer {
    pub fn new(
        wallet_id: impl Into<String>,
        provider: Arc<dyn WalletDataProvider>,
        settings: SharedSettings,
    ) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            provider,
            settings,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl Monitor for AutoRebalancer {
    fn name(&self) -> &str {
        "Auto Rebalancer"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn check(&mut self) -> Result<Vec<Alert>, WalletError> {
        let target = self.settings.target_allocation().await;
        let current = self.provider.current_allocation(&self.wallet_id).await?;

        let mut alerts = Vec::new();
        for bucket in RiskBucket::ALL {
            let target_fraction = target.fraction(bucket);
            let current_fraction = current.get(&bucket).copied().unwrap_or(0.0);
            let drift = (current_fraction - target_fraction).abs();

            if drift > DRIFT_THRESHOLD {
                alerts.push(Alert::new(
                    AlertKind::Rebalance,
                    AlertPriority::Medium,
                    "Portfolio needs rebalancing",
                    format!("{bucket} allocation drifted {:.1}% from target", drift * 100.0),
                    "Rebalance",
                ));
            }
        }

        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitors::testutil::StaticProvider;
    use crate::settings::{AgentSettings, SettingsUpdate};
    use std::collections::HashMap;
    use wallet_core::RiskTolerance;

    fn allocation(low: f64, moderate: f64, high: f64) -> HashMap<RiskBucket, f64> {
        HashMap::from([
            (RiskBucket::Low, low),
            (RiskBucket::Moderate, moderate),
            (RiskBucket::High, high),
        ])
    }

    fn rebalancer(
        current: HashMap<RiskBucket, f64>,
        settings: SharedSettings,
    ) -> AutoRebalancer {
        let provider = StaticProvider {
            allocation: current,
            ..Default::default()
        };
        AutoRebalancer::new("GTEST", Arc::new(provider), settings)
    }

    #[tokio::test]
    async fn drift_at_threshold_does_not_fire() {
        // Moderate target is 0.50/0.40/0.10; HIGH at 0.20 drifts exactly 0.10.
        let settings = SharedSettings::new(AgentSettings::default());
        let mut monitor = rebalancer(allocation(0.45, 0.35, 0.20), settings);
        assert!(monitor.check().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn drift_over_threshold_fires_per_bucket() {
        let settings = SharedSettings::new(AgentSettings::default());
        let mut monitor = rebalancer(allocation(0.30, 0.40, 0.30), settings);

        let alerts = monitor.check().await.unwrap();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.priority == AlertPriority::Medium));
        assert_eq!(alerts[0].message, "LOW allocation drifted 20.0% from target");
        assert_eq!(
            alerts[1].message,
            "HIGH allocation drifted 20.0% from target"
        );
    }

    #[tokio::test]
    async fn tolerance_change_applies_on_next_cycle() {
        let settings = SharedSettings::new(AgentSettings::default());
        let mut monitor = rebalancer(allocation(0.30, 0.40, 0.30), settings.clone());

        assert_eq!(monitor.check().await.unwrap().len(), 2);

        // Aggressive target is exactly the current allocation.
        settings
            .apply(SettingsUpdate {
                risk_tolerance: Some(RiskTolerance::Aggressive),
                ..Default::default()
            })
            .await;

        assert!(monitor.check().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_bucket_counts_as_zero() {
        let settings = SharedSettings::new(AgentSettings::default());
        // Only LOW reported; MODERATE (target 0.40) reads as 0.0.
        let current = HashMap::from([(RiskBucket::Low, 0.50)]);
        let mut monitor = rebalancer(current, settings);

        let alerts = monitor.check().await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.starts_with("MODERATE"));
    }
}
