use serde::{Deserialize, Serialize};
use wallet_core::{AssetBalance, RiskBucket, RiskTolerance, TargetAllocation};

use crate::matcher::YieldMatch;

/// One slice of the suggested allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedAllocation {
    pub protocol: String,
    pub asset: String,
    pub allocation_usd: f64,
    pub allocation_percent: f64,
    pub expected_apy: f64,
    pub risk: RiskBucket,
}

/// Suggested portfolio allocation across risk buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub allocations: Vec<PlannedAllocation>,
    pub total_allocated: f64,
    pub projected_annual_return: f64,
    pub projected_monthly_return: f64,
    pub strategy: RiskTolerance,
}

/// Suggests how to spread portfolio value across protocols per risk bucket.
pub struct PortfolioOptimizer;

impl PortfolioOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Allocate total portfolio value per the tolerance's target fractions,
    /// picking the highest-APY opportunity within each bucket.
    pub fn optimize(
        &self,
        balances: &[AssetBalance],
        opportunities: &[YieldMatch],
        tolerance: RiskTolerance,
    ) -> AllocationPlan {
        let total_value: f64 = balances.iter().map(|b| b.value_usd).sum();
        let target = TargetAllocation::for_tolerance(tolerance);

        let mut allocations = Vec::new();
        for bucket in RiskBucket::ALL {
            let fraction = target.fraction(bucket);
            let allocation_usd = total_value * fraction;
            if allocation_usd <= 0.0 {
                continue;
            }

            let best = opportunities
                .iter()
                .filter(|o| o.risk == bucket)
                .max_by(|a, b| a.apy.partial_cmp(&b.apy).unwrap_or(std::cmp::Ordering::Equal));

            if let Some(best) = best {
                allocations.push(PlannedAllocation {
                    protocol: best.protocol.clone(),
                    asset: best.asset.clone(),
                    allocation_usd,
                    allocation_percent: fraction * 100.0,
                    expected_apy: best.apy,
                    risk: bucket,
                });
            }
        }

        let projected_annual_return: f64 = allocations
            .iter()
            .map(|a| a.allocation_usd * a.expected_apy / 100.0)
            .sum();

        AllocationPlan {
            allocations,
            total_allocated: total_value,
            projected_annual_return,
            projected_monthly_return: projected_annual_return / 12.0,
            strategy: tolerance,
        }
    }
}

impl Default for PortfolioOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances() -> Vec<AssetBalance> {
        vec![AssetBalance {
            asset: "XLM".to_string(),
            balance: 5000.0,
            value_usd: 1000.0,
            last_activity: None,
        }]
    }

    fn opportunity(protocol: &str, apy: f64, risk: RiskBucket) -> YieldMatch {
        YieldMatch {
            protocol: protocol.to_string(),
            asset: "XLM".to_string(),
            kind: "lending".to_string(),
            apy,
            risk,
            potential_earnings: 0.0,
            min_investment: 10.0,
        }
    }

    #[test]
    fn conservative_plan_skips_high_bucket() {
        let optimizer = PortfolioOptimizer::new();
        let opps = vec![
            opportunity("Stellar Lend", 8.3, RiskBucket::Low),
            opportunity("Aquarius", 12.5, RiskBucket::Moderate),
            opportunity("Degen Pool", 40.0, RiskBucket::High),
        ];

        let plan = optimizer.optimize(&balances(), &opps, RiskTolerance::Conservative);
        assert!(plan.allocations.iter().all(|a| a.risk != RiskBucket::High));
        let low = plan
            .allocations
            .iter()
            .find(|a| a.risk == RiskBucket::Low)
            .unwrap();
        assert!((low.allocation_usd - 800.0).abs() < 1e-9);
    }

    #[test]
    fn picks_best_apy_per_bucket() {
        let optimizer = PortfolioOptimizer::new();
        let opps = vec![
            opportunity("Ultrastellar", 5.2, RiskBucket::Low),
            opportunity("Stellar Lend", 8.3, RiskBucket::Low),
        ];

        let plan = optimizer.optimize(&balances(), &opps, RiskTolerance::Moderate);
        let low = plan
            .allocations
            .iter()
            .find(|a| a.risk == RiskBucket::Low)
            .unwrap();
        assert_eq!(low.protocol, "Stellar Lend");
    }

    #[test]
    fn projected_returns_follow_allocations() {
        let optimizer = PortfolioOptimizer::new();
        let opps = vec![opportunity("Stellar Lend", 10.0, RiskBucket::Low)];

        let plan = optimizer.optimize(&balances(), &opps, RiskTolerance::Moderate);
        // Only the LOW bucket found an opportunity: 50% of $1000 at 10% APY.
        assert!((plan.projected_annual_return - 50.0).abs() < 1e-9);
        assert!((plan.projected_monthly_return - 50.0 / 12.0).abs() < 1e-9);
    }
}
