use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::{Alert, AlertKind, AlertPriority};
use wallet_core::{WalletDataProvider, WalletError};

use crate::monitor::Monitor;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Smallest unclaimed total worth alerting about, in USD.
const MIN_CLAIM_USD: f64 = 1.0;

/// Watches unclaimed protocol rewards.
///
/// Threshold-absolute: may fire on the very first cycle.
pub struct YieldHarvester {
    wallet_id: String,
    provider: Arc<dyn WalletDataProvider>,
    interval: Duration,
}

impl YieldHarvester {
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
impl Monitor for YieldHarvester {
    fn name(&self) -> &str {
        "Yield Harvester"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn check(&mut self) -> Result<Vec<Alert>, WalletError> {
        let rewards = self.provider.unclaimed_rewards(&self.wallet_id).await?;
        let total: f64 = rewards.iter().map(|r| r.value_usd).sum();

        if total < MIN_CLAIM_USD {
            return Ok(Vec::new());
        }

        Ok(vec![Alert::new(
            AlertKind::Harvest,
            AlertPriority::Low,
            format!("${total:.2} in unclaimed rewards"),
            format!("Ready to harvest from {} protocols", rewards.len()),
            "Claim All",
        )])
    }
}
