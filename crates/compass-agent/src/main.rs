use std::sync::Arc;

use agent_orchestrator::AgentOrchestrator;
use anyhow::Result;
use notification_service::LogTransport;
use tokio::signal::unix::SignalKind;
use wallet_core::MockWalletProvider;

mod config;

use config::AgentConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env, init tracing
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    tracing::info!("Starting Stellar Compass Wallet Agent");

    // 2. Load configuration
    let config = AgentConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Wallet: {}", config.wallet_address);
    tracing::info!("  Risk tolerance: {:?}", config.risk_tolerance);
    tracing::info!(
        "  Channels: push={} email={} sms={}",
        config.push_enabled,
        config.email_enabled,
        config.sms_enabled
    );
    tracing::info!("  Idle scan interval: {}s", config.idle_scan_interval);
    tracing::info!("  Price scan interval: {}s", config.price_scan_interval);

    // 3. Wire the wallet data source and the notification transport.
    // Horizon-backed providers plug in here once live data lands.
    let provider = Arc::new(MockWalletProvider::new());
    let transport = Arc::new(LogTransport);

    let orchestrator = AgentOrchestrator::new(
        config.wallet_address.clone(),
        provider,
        config.settings(),
        transport,
    )
    .with_intervals(config.intervals());

    // 4. Activate all monitors
    orchestrator.activate_all().await?;
    tracing::info!("All monitors active");

    // 5. Run until SIGINT or SIGTERM
    let mut sigterm = tokio::signal::unix::signal(SignalKind::terminate())?;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received SIGINT");
        }
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM");
        }
    }

    // 6. Graceful shutdown: in-flight cycles finish, then tasks park
    orchestrator.deactivate_all().await;
    tracing::info!(
        "Shut down with {} alerts in history",
        orchestrator.alert_count().await
    );

    Ok(())
}
