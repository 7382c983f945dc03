//! The six monitor variants.

pub mod harvester;
pub mod idle_assets;
pub mod opportunity_scout;
pub mod price_movement;
pub mod rebalancer;
pub mod risk;

pub use harvester::YieldHarvester;
pub use idle_assets::IdleAssetMonitor;
pub use opportunity_scout::OpportunityScout;
pub use price_movement::PriceMovementMonitor;
pub use rebalancer::AutoRebalancer;
pub use risk::RiskMonitor;

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use wallet_core::{
        AssetBalance, ProtocolRisk, RiskBucket, UnclaimedReward, WalletDataProvider, WalletError,
        YieldOpportunity,
    };

    /// Provider returning canned data. Prices and opportunities are consumed
    /// as a series, one element per call, so tests can script successive
    /// observations; an exhausted series fails like a dead data source.
    #[derive(Default)]
    pub struct StaticProvider {
        pub balances: Vec<AssetBalance>,
        pub rewards: Vec<UnclaimedReward>,
        pub allocation: HashMap<RiskBucket, f64>,
        pub risks: Vec<ProtocolRisk>,
        pub price_series: Mutex<VecDeque<HashMap<String, f64>>>,
        pub opportunity_series: Mutex<VecDeque<Vec<YieldOpportunity>>>,
    }

    impl StaticProvider {
        pub fn push_prices(&self, prices: &[(&str, f64)]) {
            let map = prices
                .iter()
                .map(|(asset, price)| (asset.to_string(), *price))
                .collect();
            self.price_series.lock().unwrap().push_back(map);
        }

        pub fn push_opportunities(&self, opportunities: Vec<YieldOpportunity>) {
            self.opportunity_series
                .lock()
                .unwrap()
                .push_back(opportunities);
        }
    }

    #[async_trait]
    impl WalletDataProvider for StaticProvider {
        async fn balances(&self, _wallet_id: &str) -> Result<Vec<AssetBalance>, WalletError> {
            Ok(self.balances.clone())
        }

        async fn unclaimed_rewards(
            &self,
            _wallet_id: &str,
        ) -> Result<Vec<UnclaimedReward>, WalletError> {
            Ok(self.rewards.clone())
        }

        async fn current_prices(&self) -> Result<HashMap<String, f64>, WalletError> {
            self.price_series
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| WalletError::DataFetch("price series exhausted".into()))
        }

        async fn current_allocation(
            &self,
            _wallet_id: &str,
        ) -> Result<HashMap<RiskBucket, f64>, WalletError> {
            Ok(self.allocation.clone())
        }

        async fn protocol_risks(&self, _wallet_id: &str) -> Result<Vec<ProtocolRisk>, WalletError> {
            Ok(self.risks.clone())
        }

        async fn current_opportunities(&self) -> Result<Vec<YieldOpportunity>, WalletError> {
            self.opportunity_series
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| WalletError::DataFetch("opportunity series exhausted".into()))
        }
    }
}
