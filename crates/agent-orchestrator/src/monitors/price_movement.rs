use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::{Alert, AlertKind, AlertPriority};
use wallet_core::{WalletDataProvider, WalletError};

use crate::monitor::Monitor;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Relative price change that triggers an alert.
const MOVE_THRESHOLD: f64 = 0.05;

/// Relative change at which an alert escalates from Medium to High.
const ESCALATION_THRESHOLD: f64 = 0.10;

/// Watches tracked asset prices for significant moves against each asset's
/// last observed price. An asset's first observation only records the
/// baseline; it never fires an alert.
pub struct PriceMovementMonitor {
    provider: Arc<dyn WalletDataProvider>,
    last_prices: HashMap<String, f64>,
    interval: Duration,
}

impl PriceMovementMonitor {
    pub fn new(provider: Arc<dyn WalletDataProvider>) -> Self {
        Self {
            provider,
            last_prices: HashMap::new(),
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl Monitor for PriceMovementMonitor {
    fn name(&self) -> &str {
        "Price Movement Monitor"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn check(&mut self) -> Result<Vec<Alert>, WalletError> {
        let prices = self.provider.current_prices().await?;
        let mut alerts = Vec::new();

        for (asset, price) in prices {
            if let Some(&previous) = self.last_prices.get(&asset) {
                let change = (price - previous) / previous;
                if change.abs() >= MOVE_THRESHOLD {
                    let direction = if change > 0.0 { "up" } else { "down" };
                    let priority = if change.abs() < ESCALATION_THRESHOLD {
                        AlertPriority::Medium
                    } else {
                        AlertPriority::High
                    };
                    alerts.push(Alert::new(
                        AlertKind::PriceMovement,
                        priority,
                        format!("{asset} {direction} {:.1}%", change.abs() * 100.0),
                        format!("Current price: ${price:.4}"),
                        "Check Portfolio",
                    ));
                }
            }
            self.last_prices.insert(asset, price);
        }

        Ok(alerts)
    }
}
