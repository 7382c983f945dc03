use serde::{Deserialize, Serialize};
use wallet_core::RiskBucket;

/// Individual factor scores (0-100 each, lower is safer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactors {
    pub time_active: f64,
    pub tvl: f64,
    pub audit: f64,
    pub exploits: f64,
}

/// Composite risk assessment for a protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    pub protocol: String,
    /// 0-100, lower is safer.
    pub overall_score: f64,
    pub risk: RiskBucket,
    pub factors: RiskFactors,
    pub recommendation: &'static str,
}

struct ProtocolProfile {
    name: &'static str,
    time_active_days: f64,
    tvl_usd: f64,
    audited: bool,
    exploit_count: usize,
}

/// Known protocol track records. Unknown protocols score as fully unproven.
const PROFILES: &[ProtocolProfile] = &[
    ProtocolProfile {
        name: "Aquarius",
        time_active_days: 730.0,
        tvl_usd: 45_000_000.0,
        audited: true,
        exploit_count: 0,
    },
    ProtocolProfile {
        name: "Stellar Lend",
        time_active_days: 365.0,
        tvl_usd: 12_000_000.0,
        audited: true,
        exploit_count: 0,
    },
    ProtocolProfile {
        name: "Ultrastellar",
        time_active_days: 900.0,
        tvl_usd: 8_500_000.0,
        audited: true,
        exploit_count: 0,
    },
    ProtocolProfile {
        name: "StellarX AMM",
        time_active_days: 1095.0,
        tvl_usd: 28_000_000.0,
        audited: true,
        exploit_count: 0,
    },
    ProtocolProfile {
        name: "Yndx Finance",
        time_active_days: 180.0,
        tvl_usd: 5_000_000.0,
        audited: false,
        exploit_count: 0,
    },
];

/// Evaluates protocol safety from track record, TVL, audits, and exploit history.
pub struct RiskScoringEngine;

impl RiskScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score_protocol(&self, protocol_name: &str) -> RiskScore {
        let profile = PROFILES.iter().find(|p| p.name == protocol_name);

        let (time_active_days, tvl_usd, audited, exploit_count) = match profile {
            Some(p) => (p.time_active_days, p.tvl_usd, p.audited, p.exploit_count),
            None => (0.0, 0.0, false, 0),
        };

        let factors = RiskFactors {
            time_active: (100.0 - time_active_days / 10.0).max(0.0),
            tvl: (100.0 - tvl_usd / 500_000.0).max(0.0),
            audit: if audited { 0.0 } else { 50.0 },
            exploits: exploit_count as f64 * 30.0,
        };

        let overall_score =
            (factors.time_active + factors.tvl + factors.audit + factors.exploits) / 4.0;

        let risk = if overall_score < 30.0 {
            RiskBucket::Low
        } else if overall_score < 60.0 {
            RiskBucket::Moderate
        } else {
            RiskBucket::High
        };

        RiskScore {
            protocol: protocol_name.to_string(),
            overall_score: (overall_score * 100.0).round() / 100.0,
            risk,
            factors,
            recommendation: if overall_score < 50.0 {
                "Recommended"
            } else {
                "Use caution"
            },
        }
    }
}

impl Default for RiskScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
