use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use defi_analysis::IdleAssetDetector;
use notification_service::{Alert, AlertKind, AlertPriority};
use wallet_core::{WalletDataProvider, WalletError};

use crate::monitor::Monitor;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Days idle at which an alert escalates from Medium to High.
const ESCALATION_DAYS: i64 = 60;

/// Watches for assets sitting idle without generating yield.
///
/// Threshold-absolute: may fire on its very first cycle.
pub struct IdleAssetMonitor {
    wallet_id: String,
    provider: Arc<dyn WalletDataProvider>,
    detector: IdleAssetDetector,
    interval: Duration,
}

impl IdleAssetMonitor {
    pub fn new(wallet_id: impl Into<String>, provider: Arc<dyn WalletDataProvider>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            provider,
            detector: IdleAssetDetector::default(),
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl Monitor for IdleAssetMonitor {
    fn name(&self) -> &str {
        "Idle Asset Monitor"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn check(&mut self) -> Result<Vec<Alert>, WalletError> {
        let balances = self.provider.balances(&self.wallet_id).await?;
        let idle = self.detector.detect(&balances, Utc::now());

        Ok(idle
            .iter()
            .map(|asset| {
                let priority = if asset.days_idle < ESCALATION_DAYS {
                    AlertPriority::Medium
                } else {
                    AlertPriority::High
                };
                Alert::new(
                    AlertKind::IdleAsset,
                    priority,
                    format!("{} sitting idle for {} days", asset.asset, asset.days_idle),
                    format!(
                        "${:.2} could be earning ${:.2}/month",
                        asset.value_usd, asset.potential_monthly
                    ),
                    "Activate Now",
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitors::testutil::StaticProvider;
    use chrono::Duration as ChronoDuration;
    use wallet_core::AssetBalance;

    fn monitor_with(days_idle: i64, value_usd: f64) -> IdleAssetMonitor {
        let provider = StaticProvider {
            balances: vec![AssetBalance {
                asset: "XLM".to_string(),
                balance: 5000.0,
                value_usd,
                last_activity: Some(Utc::now() - ChronoDuration::days(days_idle)),
            }],
            ..Default::default()
        };
        IdleAssetMonitor::new("GTEST", Arc::new(provider))
    }

    #[tokio::test]
    async fn sixty_one_days_idle_is_high_priority() {
        let mut monitor = monitor_with(61, 600.0);
        let alerts = monitor.check().await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, AlertPriority::High);
        assert_eq!(alerts[0].kind, AlertKind::IdleAsset);
        assert_eq!(alerts[0].title, "XLM sitting idle for 61 days");
    }

    #[tokio::test]
    async fn forty_five_days_idle_is_medium_priority() {
        let mut monitor = monitor_with(45, 600.0);
        let alerts = monitor.check().await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, AlertPriority::Medium);
    }

    #[tokio::test]
    async fn twenty_days_idle_is_below_threshold() {
        let mut monitor = monitor_with(20, 600.0);
        assert!(monitor.check().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn message_reports_value_and_monthly_yield() {
        let mut monitor = monitor_with(45, 600.0);
        let alerts = monitor.check().await.unwrap();
        // $600 at the 8% reference APY is $4.00/month.
        assert_eq!(alerts[0].message, "$600.00 could be earning $4.00/month");
    }
}
