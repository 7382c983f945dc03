//! Alert model and notification delivery seam for Stellar Compass.
//!
//! Monitors produce [`Alert`] values; the orchestrator routes them through a
//! [`NotificationTransport`]. Real push/SMS/email delivery lives behind that
//! trait; this crate ships only the logging transport used by default.

mod templates;

pub use templates::EmailTemplate;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Max SMS body length after the priority prefix.
const SMS_BODY_LIMIT: usize = 120;

/// Category of a detected wallet condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    IdleAsset,
    ApySpike,
    RiskAlert,
    Rebalance,
    Harvest,
    PriceMovement,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::IdleAsset => "IDLE_ASSET",
            AlertKind::ApySpike => "APY_SPIKE",
            AlertKind::RiskAlert => "RISK_ALERT",
            AlertKind::Rebalance => "REBALANCE",
            AlertKind::Harvest => "HARVEST",
            AlertKind::PriceMovement => "PRICE_MOVEMENT",
        }
    }
}

/// Urgency of an alert. Ordered: Low < Medium < High < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::Low => "LOW",
            AlertPriority::Medium => "MEDIUM",
            AlertPriority::High => "HIGH",
            AlertPriority::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected wallet condition. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
    #[serde(rename = "action")]
    pub suggested_action: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        priority: AlertPriority,
        title: impl Into<String>,
        message: impl Into<String>,
        suggested_action: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            priority,
            title: title.into(),
            message: message.into(),
            suggested_action: suggested_action.into(),
            created_at: Utc::now(),
        }
    }

    /// Message formatted for SMS delivery: priority tag prefix, body truncated
    /// to 120 characters.
    pub fn sms_body(&self) -> String {
        let truncated: String = self.message.chars().take(SMS_BODY_LIMIT).collect();
        format!("[{}] Stellar Compass: {}", self.priority, truncated)
    }
}

/// Errors from the notification transports.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Push delivery error: {0}")]
    Push(String),
    #[error("Email delivery error: {0}")]
    Email(String),
    #[error("SMS delivery error: {0}")]
    Sms(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Delivery seam for the three notification channels.
///
/// Implementations report success or failure; callers log failures and move
/// on. A transport must never panic the caller's task.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn send_push(&self, alert: &Alert) -> Result<(), NotificationError>;
    async fn send_email(&self, alert: &Alert) -> Result<(), NotificationError>;
    async fn send_sms(&self, phone: &str, body: &str) -> Result<(), NotificationError>;
}

/// Transport that logs deliveries instead of sending them.
///
/// The default wiring for local runs; swap in real FCM/SMTP/Twilio transports
/// behind the same trait.
pub struct LogTransport;

#[async_trait]
impl NotificationTransport for LogTransport {
    async fn send_push(&self, alert: &Alert) -> Result<(), NotificationError> {
        tracing::info!(title = %alert.title, "push: {}", alert.message);
        Ok(())
    }

    async fn send_email(&self, alert: &Alert) -> Result<(), NotificationError> {
        let html = EmailTemplate::render(alert);
        tracing::info!(
            title = %alert.title,
            body_bytes = html.len(),
            "email: {}",
            alert.message
        );
        Ok(())
    }

    async fn send_sms(&self, phone: &str, body: &str) -> Result<(), NotificationError> {
        tracing::info!(to = %phone, "sms: {}", body);
        Ok(())
    }
}
