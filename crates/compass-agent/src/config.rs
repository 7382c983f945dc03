use std::env;
use std::time::Duration;

use agent_orchestrator::{AgentSettings, MonitorIntervals};
use anyhow::{Context, Result};
use wallet_core::RiskTolerance;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    // Wallet
    pub wallet_address: String,
    pub risk_tolerance: RiskTolerance,

    // Notification channels
    pub push_enabled: bool,             // true
    pub email_enabled: bool,            // true
    pub sms_enabled: bool,              // false
    pub phone_number: String,

    // Monitor cadences, seconds
    pub idle_scan_interval: u64,        // 300 (5 minutes)
    pub opportunity_scan_interval: u64, // 300
    pub risk_scan_interval: u64,        // 600 (10 minutes)
    pub rebalance_interval: u64,        // 3600 (hourly)
    pub harvest_interval: u64,          // 3600
    pub price_scan_interval: u64,       // 300
}

impl AgentConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            wallet_address: env::var("WALLET_ADDRESS")
                .context("WALLET_ADDRESS not set")?,
            risk_tolerance: RiskTolerance::parse_lossy(
                &env::var("RISK_TOLERANCE").unwrap_or_else(|_| "moderate".to_string()),
            ),

            // Channels
            push_enabled: env::var("PUSH_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()?,
            email_enabled: env::var("EMAIL_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()?,
            sms_enabled: env::var("SMS_ENABLED")
                .unwrap_or_else(|_| "false".to_string())
                .parse()?,
            phone_number: env::var("PHONE_NUMBER").unwrap_or_else(|_| String::new()),

            // Cadences
            idle_scan_interval: env::var("IDLE_SCAN_INTERVAL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            opportunity_scan_interval: env::var("OPPORTUNITY_SCAN_INTERVAL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            risk_scan_interval: env::var("RISK_SCAN_INTERVAL")
                .unwrap_or_else(|_| "600".to_string())
                .parse()?,
            rebalance_interval: env::var("REBALANCE_INTERVAL")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,
            harvest_interval: env::var("HARVEST_INTERVAL")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,
            price_scan_interval: env::var("PRICE_SCAN_INTERVAL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn settings(&self) -> AgentSettings {
        let mut settings = AgentSettings::new(self.risk_tolerance, self.phone_number.clone());
        settings.push_enabled = self.push_enabled;
        settings.email_enabled = self.email_enabled;
        settings.sms_enabled = self.sms_enabled;
        settings
    }

    pub fn intervals(&self) -> MonitorIntervals {
        MonitorIntervals {
            idle_assets: Duration::from_secs(self.idle_scan_interval),
            opportunity_scout: Duration::from_secs(self.opportunity_scan_interval),
            risk: Duration::from_secs(self.risk_scan_interval),
            rebalancer: Duration::from_secs(self.rebalance_interval),
            harvester: Duration::from_secs(self.harvest_interval),
            price_movement: Duration::from_secs(self.price_scan_interval),
        }
    }
}
