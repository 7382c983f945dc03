//! Mock wallet data provider.
//!
//! Stands in for the Horizon-backed provider so the agents can run (and be
//! tested) without network access. Datasets mirror the reference wallet used
//! during development; prices and APYs get a little random jitter per call so
//! the movement monitors have something to compare.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::{thread_rng, Rng};

use crate::error::WalletError;
use crate::provider::WalletDataProvider;
use crate::types::{
    AssetBalance, ProtocolRisk, RiskBucket, RiskSeverity, UnclaimedReward, YieldOpportunity,
};

pub struct MockWalletProvider {
    /// Max relative price jitter per call (0.02 = +/-2%).
    price_jitter: f64,
}

impl MockWalletProvider {
    pub fn new() -> Self {
        Self { price_jitter: 0.02 }
    }

    /// Provider with deterministic output (no jitter), for tests.
    pub fn fixed() -> Self {
        Self { price_jitter: 0.0 }
    }

    fn jitter(&self, value: f64) -> f64 {
        if self.price_jitter == 0.0 {
            return value;
        }
        let factor = thread_rng().gen_range(-self.price_jitter..=self.price_jitter);
        value * (1.0 + factor)
    }
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletDataProvider for MockWalletProvider {
    async fn balances(&self, _wallet_id: &str) -> Result<Vec<AssetBalance>, WalletError> {
        let now = Utc::now();
        Ok(vec![
            AssetBalance {
                asset: "XLM".to_string(),
                balance: 5000.0,
                value_usd: 600.0,
                last_activity: Some(now - Duration::days(45)),
            },
            AssetBalance {
                asset: "USDC".to_string(),
                balance: 1500.0,
                value_usd: 1500.0,
                last_activity: Some(now - Duration::days(33)),
            },
        ])
    }

    async fn unclaimed_rewards(
        &self,
        _wallet_id: &str,
    ) -> Result<Vec<UnclaimedReward>, WalletError> {
        Ok(vec![UnclaimedReward {
            protocol: "Aquarius".to_string(),
            asset: "XLM".to_string(),
            amount: 8.5,
            value_usd: 1.02,
        }])
    }

    async fn current_prices(&self) -> Result<HashMap<String, f64>, WalletError> {
        let mut prices = HashMap::new();
        prices.insert("XLM".to_string(), self.jitter(0.12));
        prices.insert("USDC".to_string(), 1.00);
        prices.insert("BTC".to_string(), self.jitter(45_000.0));
        Ok(prices)
    }

    async fn current_allocation(
        &self,
        _wallet_id: &str,
    ) -> Result<HashMap<RiskBucket, f64>, WalletError> {
        let mut allocation = HashMap::new();
        allocation.insert(RiskBucket::Low, 0.45);
        allocation.insert(RiskBucket::Moderate, 0.35);
        allocation.insert(RiskBucket::High, 0.20);
        Ok(allocation)
    }

    async fn protocol_risks(&self, _wallet_id: &str) -> Result<Vec<ProtocolRisk>, WalletError> {
        Ok(vec![ProtocolRisk {
            severity: RiskSeverity::Medium,
            title: "Portfolio concentration risk".to_string(),
            message: "85% of portfolio in single protocol. Consider diversifying.".to_string(),
        }])
    }

    async fn current_opportunities(&self) -> Result<Vec<YieldOpportunity>, WalletError> {
        Ok(vec![
            YieldOpportunity {
                protocol: "Aquarius".to_string(),
                apy: self.jitter(12.5),
                risk: RiskBucket::Moderate,
            },
            YieldOpportunity {
                protocol: "Stellar Lend".to_string(),
                apy: self.jitter(8.3),
                risk: RiskBucket::Low,
            },
        ])
    }
}
