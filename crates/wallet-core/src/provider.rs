use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::WalletError;
use crate::types::{
    AssetBalance, ProtocolRisk, RiskBucket, UnclaimedReward, YieldOpportunity,
};

/// Source of on-chain wallet and market data.
///
/// Every method may fail; callers on a monitoring cycle are expected to treat
/// a failure as "no data this cycle" rather than propagate it further.
#[async_trait]
pub trait WalletDataProvider: Send + Sync {
    /// Current asset balances for the wallet.
    async fn balances(&self, wallet_id: &str) -> Result<Vec<AssetBalance>, WalletError>;

    /// Rewards accrued but not yet claimed by the wallet.
    async fn unclaimed_rewards(&self, wallet_id: &str)
        -> Result<Vec<UnclaimedReward>, WalletError>;

    /// Latest USD prices per tracked asset.
    async fn current_prices(&self) -> Result<HashMap<String, f64>, WalletError>;

    /// Current portfolio fraction per risk bucket.
    async fn current_allocation(
        &self,
        wallet_id: &str,
    ) -> Result<HashMap<RiskBucket, f64>, WalletError>;

    /// Active risk conditions for protocols the wallet is exposed to.
    async fn protocol_risks(&self, wallet_id: &str) -> Result<Vec<ProtocolRisk>, WalletError>;

    /// Yield opportunities currently offered across protocols.
    async fn current_opportunities(&self) -> Result<Vec<YieldOpportunity>, WalletError>;
}
