//! Wastewatch
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - ORION_HOST: Context broker host (default: 172.21.32.104)
//! - ORION_PORT: Context broker port (default: 1026)
//! - ENTITY_ID: Monitored entity (default: urn:ngsi-ld:WasteContainer:67-49-e4-49-70-22-00-28)
//! - TELEGRAM_BOT_TOKEN: Bot API token (required for delivery)
//! - TELEGRAM_CHAT_ID: Destination chat (required for delivery)
//! - POLL_INTERVAL_SECS: Sleep between checks (default: 1800)
//! - RUST_LOG: Log level (default: info)

use wastewatch::config::MonitorConfig;
use wastewatch::monitor::{describe_interval, MonitorWorker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wastewatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MonitorConfig::from_env();

    tracing::info!("Wastewatch configuration:");
    tracing::info!("  Broker: {}", config.orion.entity_url());
    tracing::info!("  Entity: {}", config.orion.entity_id);
    tracing::info!(
        "  Telegram chat: {}",
        config.telegram.chat_id.as_deref().unwrap_or("(not set)")
    );
    tracing::info!(
        "  Poll interval: {}",
        describe_interval(config.poll_interval)
    );

    println!(
        "\n Wastewatch: waste container fill-level alerts\n Version: {}\n",
        env!("CARGO_PKG_VERSION")
    );

    let worker = MonitorWorker::from_config(&config)?;

    tokio::select! {
        _ = worker.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, exiting");
        }
    }

    Ok(())
}
