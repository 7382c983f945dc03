use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::{Alert, AlertKind, AlertPriority};
use wallet_core::{RiskSeverity, WalletDataProvider, WalletError};

use crate::monitor::Monitor;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Watches protocol risk conditions for the wallet's positions.
///
/// Only High and Critical severities raise alerts; the alert priority mirrors
/// the severity. Threshold-absolute: may fire on the very first cycle.
pub struct RiskMonitor {
    wallet_id: String,
    provider: Arc<dyn WalletDataProvider>,
    interval: Duration,
}

impl RiskMonitor {
    pub fn new(wallet_id: impl Into<String>, provider: Arc<dyn WalletDataProvider>) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            provider,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl Monitor for RiskMonitor {
    fn name(&self) -> &str {
        "Risk Monitor"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn check(&mut self) -> Result<Vec<Alert>, WalletError> {
        let risks = self.provider.protocol_risks(&self.wallet_id).await?;

        Ok(risks
            .iter()
            .filter(|risk| risk.severity >= RiskSeverity::High)
            .map(|risk| {
                let priority = if risk.severity == RiskSeverity::Critical {
                    AlertPriority::Critical
                } else {
                    AlertPriority::High
                };
                Alert::new(
                    AlertKind::RiskAlert,
                    priority,
                    risk.title.clone(),
                    risk.message.clone(),
                    "Review Position",
                )
            })
            .collect())
    }
}
