use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use notification_service::{Alert, AlertKind, AlertPriority};
use wallet_core::{WalletDataProvider, WalletError};

use crate::monitor::Monitor;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// APY increase in percentage points that counts as a spike.
const SPIKE_THRESHOLD: f64 = 2.0;

/// Watches protocol APYs for spikes against each protocol's own last
/// observed value. A protocol's first observation only records the baseline;
/// it never fires an alert.
pub struct OpportunityScout {
    provider: Arc<dyn WalletDataProvider>,
    tracked_apys: HashMap<String, f64>,
    interval: Duration,
}

impl OpportunityScout {
    pub fn new(provider: Arc<dyn WalletDataProvider>) -> Self {
        Self {
            provider,
            tracked_apys: HashMap::new(),
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[async_trait]
impl Monitor for OpportunityScout {
    fn name(&self) -> &str {
        "Opportunity Scout"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn check(&mut self) -> Result<Vec<Alert>, WalletError> {
        let opportunities = self.provider.current_opportunities().await?;
        let mut alerts = Vec::new();

        for opportunity in &opportunities {
            if let Some(&previous_apy) = self.tracked_apys.get(&opportunity.protocol) {
                let increase = opportunity.apy - previous_apy;
                if increase > SPIKE_THRESHOLD {
                    alerts.push(Alert::new(
                        AlertKind::ApySpike,
                        AlertPriority::High,
                        format!(
                            "{} APY jumped to {:.1}%",
                            opportunity.protocol, opportunity.apy
                        ),
                        format!(
                            "Up {:.1}% from {:.1}%. Time to invest?",
                            increase, previous_apy
                        ),
                        "View Details",
                    ));
                }
            }
            self.tracked_apys
                .insert(opportunity.protocol.clone(), opportunity.apy);
        }

        Ok(alerts)
    }
}
