use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single asset balance held by a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset: String,
    pub balance: f64,
    pub value_usd: f64,
    /// Most recent on-chain activity touching this asset, if known.
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

/// An unclaimed protocol reward attributed to the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnclaimedReward {
    pub protocol: String,
    pub asset: String,
    pub amount: f64,
    pub value_usd: f64,
}

/// A detected risk condition in a protocol the wallet is exposed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolRisk {
    pub severity: RiskSeverity,
    pub title: String,
    pub message: String,
}

/// Severity of a detected protocol risk, ordered from benign to urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "LOW",
            RiskSeverity::Medium => "MEDIUM",
            RiskSeverity::High => "HIGH",
            RiskSeverity::Critical => "CRITICAL",
        }
    }
}

/// A yield opportunity currently offered by a protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldOpportunity {
    pub protocol: String,
    /// Advertised APY in percentage points (12.5 means 12.5%).
    pub apy: f64,
    pub risk: RiskBucket,
}

/// Coarse risk classification used for allocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBucket {
    Low,
    Moderate,
    High,
}

impl RiskBucket {
    pub const ALL: [RiskBucket; 3] = [RiskBucket::Low, RiskBucket::Moderate, RiskBucket::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBucket::Low => "LOW",
            RiskBucket::Moderate => "MODERATE",
            RiskBucket::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User risk appetite, selecting an allocation preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        }
    }

    /// Parse a user-supplied tolerance string, falling back to `Moderate`
    /// for anything unrecognized.
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => RiskTolerance::Conservative,
            "aggressive" => RiskTolerance::Aggressive,
            _ => RiskTolerance::Moderate,
        }
    }

    /// Whether a protocol in the given risk bucket is acceptable at this tolerance.
    pub fn accepts(&self, bucket: RiskBucket) -> bool {
        match self {
            RiskTolerance::Conservative => bucket == RiskBucket::Low,
            RiskTolerance::Moderate => bucket != RiskBucket::High,
            RiskTolerance::Aggressive => true,
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target portfolio fractions per risk bucket. Fractions sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetAllocation {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

impl TargetAllocation {
    /// Allocation preset for a risk tolerance.
    pub fn for_tolerance(tolerance: RiskTolerance) -> Self {
        match tolerance {
            RiskTolerance::Conservative => Self {
                low: 0.80,
                moderate: 0.20,
                high: 0.00,
            },
            RiskTolerance::Moderate => Self {
                low: 0.50,
                moderate: 0.40,
                high: 0.10,
            },
            RiskTolerance::Aggressive => Self {
                low: 0.30,
                moderate: 0.40,
                high: 0.30,
            },
        }
    }

    pub fn fraction(&self, bucket: RiskBucket) -> f64 {
        match bucket {
            RiskBucket::Low => self.low,
            RiskBucket::Moderate => self.moderate,
            RiskBucket::High => self.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_parse_lossy_defaults_to_moderate() {
        assert_eq!(
            RiskTolerance::parse_lossy("Aggressive"),
            RiskTolerance::Aggressive
        );
        assert_eq!(
            RiskTolerance::parse_lossy("whatever"),
            RiskTolerance::Moderate
        );
    }

    #[test]
    fn allocation_presets_sum_to_one() {
        for tolerance in [
            RiskTolerance::Conservative,
            RiskTolerance::Moderate,
            RiskTolerance::Aggressive,
        ] {
            let target = TargetAllocation::for_tolerance(tolerance);
            let sum = target.low + target.moderate + target.high;
            assert!((sum - 1.0).abs() < 1e-9, "{tolerance}: {sum}");
        }
    }

    #[test]
    fn conservative_accepts_only_low_risk() {
        let t = RiskTolerance::Conservative;
        assert!(t.accepts(RiskBucket::Low));
        assert!(!t.accepts(RiskBucket::Moderate));
        assert!(!t.accepts(RiskBucket::High));
    }

    #[test]
    fn severity_ordering() {
        assert!(RiskSeverity::Critical > RiskSeverity::High);
        assert!(RiskSeverity::High > RiskSeverity::Medium);
    }
}
