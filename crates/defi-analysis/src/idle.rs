use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wallet_core::AssetBalance;

/// Reference APY used when estimating what an idle balance could be earning.
const REFERENCE_APY: f64 = 0.08;

/// An asset that has been sitting without activity past the idle threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdleAsset {
    pub asset: String,
    pub balance: f64,
    pub value_usd: f64,
    pub days_idle: i64,
    /// Yield foregone so far at the reference APY.
    pub opportunity_cost: f64,
    /// What the balance could earn per month at the reference APY.
    pub potential_monthly: f64,
}

/// Detects assets sitting idle without generating yield.
#[derive(Debug, Clone)]
pub struct IdleAssetDetector {
    pub idle_threshold_days: i64,
}

impl IdleAssetDetector {
    pub fn new(idle_threshold_days: i64) -> Self {
        Self {
            idle_threshold_days,
        }
    }

    /// Scan balances for assets idle past the threshold, most costly first.
    ///
    /// Balances with no recorded activity are skipped: without a timestamp
    /// there is no defensible idle-day count.
    pub fn detect(&self, balances: &[AssetBalance], now: DateTime<Utc>) -> Vec<IdleAsset> {
        let mut idle: Vec<IdleAsset> = balances
            .iter()
            .filter(|b| b.balance > 0.0)
            .filter_map(|b| {
                let last_activity = b.last_activity?;
                let days_idle = (now - last_activity).num_days();
                if days_idle < self.idle_threshold_days {
                    return None;
                }
                let daily_rate = REFERENCE_APY / 365.0;
                Some(IdleAsset {
                    asset: b.asset.clone(),
                    balance: b.balance,
                    value_usd: b.value_usd,
                    days_idle,
                    opportunity_cost: b.value_usd * daily_rate * days_idle as f64,
                    potential_monthly: b.value_usd * REFERENCE_APY / 12.0,
                })
            })
            .collect();

        idle.sort_by(|a, b| {
            b.opportunity_cost
                .partial_cmp(&a.opportunity_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        idle
    }
}

impl Default for IdleAssetDetector {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn balance(asset: &str, value_usd: f64, days_ago: i64, now: DateTime<Utc>) -> AssetBalance {
        AssetBalance {
            asset: asset.to_string(),
            balance: 100.0,
            value_usd,
            last_activity: Some(now - Duration::days(days_ago)),
        }
    }

    #[test]
    fn detects_only_assets_past_threshold() {
        let now = Utc::now();
        let detector = IdleAssetDetector::default();
        let balances = vec![
            balance("XLM", 600.0, 45, now),
            balance("USDC", 1500.0, 10, now),
        ];

        let idle = detector.detect(&balances, now);
        assert_eq!(idle.len(), 1);
        assert_eq!(idle[0].asset, "XLM");
        assert_eq!(idle[0].days_idle, 45);
    }

    #[test]
    fn sorted_by_opportunity_cost() {
        let now = Utc::now();
        let detector = IdleAssetDetector::default();
        let balances = vec![
            balance("XLM", 600.0, 45, now),
            balance("USDC", 1500.0, 33, now),
        ];

        let idle = detector.detect(&balances, now);
        assert_eq!(idle.len(), 2);
        // 1500 * r * 33 > 600 * r * 45
        assert_eq!(idle[0].asset, "USDC");
    }

    #[test]
    fn skips_zero_balances_and_unknown_activity() {
        let now = Utc::now();
        let detector = IdleAssetDetector::default();
        let mut zero = balance("XLM", 600.0, 90, now);
        zero.balance = 0.0;
        let unknown = AssetBalance {
            asset: "BTC".to_string(),
            balance: 1.0,
            value_usd: 45_000.0,
            last_activity: None,
        };

        assert!(detector.detect(&[zero, unknown], now).is_empty());
    }
}
