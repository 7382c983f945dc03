//! Stateless portfolio analysis formulas for Stellar DeFi.
//!
//! Idle-asset detection, yield matching, protocol risk scoring, and allocation
//! optimization. Nothing here does I/O or keeps state between calls; the
//! monitoring agents feed these from a [`wallet_core::WalletDataProvider`].
//!
//! The monitors consume [`idle`] directly. The matcher, risk scorer, and
//! optimizer back the user-facing opportunity and rebalance views served by
//! an API layer on top of this workspace.

pub mod idle;
pub mod matcher;
pub mod optimizer;
pub mod risk_score;

pub use idle::{IdleAsset, IdleAssetDetector};
pub use matcher::{YieldMatch, YieldOpportunityMatcher};
pub use optimizer::{AllocationPlan, PlannedAllocation, PortfolioOptimizer};
pub use risk_score::{RiskFactors, RiskScore, RiskScoringEngine};
