use serde::{Deserialize, Serialize};
use wallet_core::{AssetBalance, RiskBucket, RiskTolerance};

/// Minimum position size we bother suggesting, in USD.
const MIN_INVESTMENT_USD: f64 = 10.0;

/// A protocol in the Stellar DeFi catalog.
#[derive(Debug, Clone)]
pub struct Protocol {
    pub name: &'static str,
    pub kind: &'static str,
    pub assets: &'static [&'static str],
    pub base_apy: f64,
    pub risk: RiskBucket,
}

/// A holding matched to a protocol that can earn yield on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldMatch {
    pub protocol: String,
    pub asset: String,
    pub kind: String,
    pub apy: f64,
    pub risk: RiskBucket,
    /// Projected monthly earnings if the full balance were deployed.
    pub potential_earnings: f64,
    pub min_investment: f64,
}

/// Matches wallet holdings with the best available yield opportunities.
pub struct YieldOpportunityMatcher {
    protocols: Vec<Protocol>,
}

impl YieldOpportunityMatcher {
    pub fn new() -> Self {
        Self {
            protocols: Self::stellar_protocols(),
        }
    }

    fn stellar_protocols() -> Vec<Protocol> {
        vec![
            Protocol {
                name: "Aquarius",
                kind: "liquidity_pool",
                assets: &["XLM", "USDC", "USDT"],
                base_apy: 12.5,
                risk: RiskBucket::Moderate,
            },
            Protocol {
                name: "Stellar Lend",
                kind: "lending",
                assets: &["XLM", "USDC"],
                base_apy: 8.3,
                risk: RiskBucket::Low,
            },
            Protocol {
                name: "Ultrastellar",
                kind: "staking",
                assets: &["XLM"],
                base_apy: 5.2,
                risk: RiskBucket::Low,
            },
            Protocol {
                name: "StellarX AMM",
                kind: "liquidity_pool",
                assets: &["XLM", "USDC", "BTC", "ETH"],
                base_apy: 15.8,
                risk: RiskBucket::Moderate,
            },
            Protocol {
                name: "Yndx Finance",
                kind: "yield_aggregator",
                assets: &["XLM", "USDC"],
                base_apy: 10.2,
                risk: RiskBucket::Moderate,
            },
        ]
    }

    /// Find yield opportunities for the given holdings, filtered by risk
    /// tolerance and ranked by APY.
    pub fn find_opportunities(
        &self,
        balances: &[AssetBalance],
        tolerance: RiskTolerance,
    ) -> Vec<YieldMatch> {
        let mut matches = Vec::new();

        for balance in balances {
            if balance.balance == 0.0 {
                continue;
            }

            for protocol in &self.protocols {
                if !protocol.assets.contains(&balance.asset.as_str()) {
                    continue;
                }
                if !tolerance.accepts(protocol.risk) {
                    continue;
                }

                let monthly_earnings = (balance.value_usd * protocol.base_apy / 100.0) / 12.0;
                matches.push(YieldMatch {
                    protocol: protocol.name.to_string(),
                    asset: balance.asset.clone(),
                    kind: protocol.kind.to_string(),
                    apy: protocol.base_apy,
                    risk: protocol.risk,
                    potential_earnings: monthly_earnings,
                    min_investment: MIN_INVESTMENT_USD,
                });
            }
        }

        matches.sort_by(|a, b| b.apy.partial_cmp(&a.apy).unwrap_or(std::cmp::Ordering::Equal));
        matches
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }
}

impl Default for YieldOpportunityMatcher {
    fn default() -> Self {
        Self::new()
    }
}
