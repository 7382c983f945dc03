use std::sync::Arc;

use tokio::sync::RwLock;
use wallet_core::{RiskTolerance, TargetAllocation};

/// Notification preferences and allocation strategy for one wallet.
///
/// Owned by the orchestrator; monitors only ever read it through
/// [`SharedSettings`].
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub phone_number: String,
    pub risk_tolerance: RiskTolerance,
    pub target_allocation: TargetAllocation,
}

impl AgentSettings {
    pub fn new(risk_tolerance: RiskTolerance, phone_number: impl Into<String>) -> Self {
        Self {
            push_enabled: true,
            email_enabled: true,
            sms_enabled: false,
            phone_number: phone_number.into(),
            risk_tolerance,
            target_allocation: TargetAllocation::for_tolerance(risk_tolerance),
        }
    }

    /// Apply a partial update; unspecified fields are left unchanged. A new
    /// risk tolerance re-derives the target allocation.
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(phone_number) = update.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(tolerance) = update.risk_tolerance {
            self.risk_tolerance = tolerance;
            self.target_allocation = TargetAllocation::for_tolerance(tolerance);
        }
        if let Some(enabled) = update.email_enabled {
            self.email_enabled = enabled;
        }
        if let Some(enabled) = update.sms_enabled {
            self.sms_enabled = enabled;
        }
        if let Some(enabled) = update.push_enabled {
            self.push_enabled = enabled;
        }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self::new(RiskTolerance::Moderate, "")
    }
}

/// Partial settings update. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub phone_number: Option<String>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub email_enabled: Option<bool>,
    pub sms_enabled: Option<bool>,
    pub push_enabled: Option<bool>,
}

/// Read-mostly handle to the live settings. Cloned into the rebalancer so it
/// sees allocation changes at its next cycle without a restart; writes go
/// through the orchestrator only.
#[derive(Clone)]
pub struct SharedSettings(Arc<RwLock<AgentSettings>>);

impl SharedSettings {
    pub fn new(settings: AgentSettings) -> Self {
        Self(Arc::new(RwLock::new(settings)))
    }

    pub async fn snapshot(&self) -> AgentSettings {
        self.0.read().await.clone()
    }

    pub async fn target_allocation(&self) -> TargetAllocation {
        self.0.read().await.target_allocation
    }

    pub(crate) async fn apply(&self, update: SettingsUpdate) {
        self.0.write().await.apply(update);
    }
}
