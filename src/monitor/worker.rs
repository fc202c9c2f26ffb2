use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::cycle::{run_cycle, CycleOutcome};
use crate::alerts::{NotifierError, TelegramNotifier};
use crate::config::MonitorConfig;
use crate::orion::{FetchError, OrionClient};

/// Poll-and-notify worker. Runs one cycle immediately, then sleeps the full
/// interval after every cycle whatever its outcome.
pub struct MonitorWorker {
    orion: OrionClient,
    notifier: TelegramNotifier,
    entity_id: String,
    interval: Duration,
    cycles: AtomicU64,
}

impl MonitorWorker {
    pub fn new(
        orion: OrionClient,
        notifier: TelegramNotifier,
        entity_id: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            orion,
            notifier,
            entity_id: entity_id.into(),
            interval,
            cycles: AtomicU64::new(0),
        }
    }

    /// Build the clients described by `config`
    pub fn from_config(config: &MonitorConfig) -> Result<Self, MonitorError> {
        let orion = OrionClient::new(&config.orion)?;
        let notifier = TelegramNotifier::new(config.telegram.clone())?;
        Ok(Self::new(
            orion,
            notifier,
            config.orion.entity_id.clone(),
            config.poll_interval,
        ))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of cycles completed so far
    pub fn cycles_run(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Run a single cycle
    pub async fn run_once(&self) -> CycleOutcome {
        let outcome = run_cycle(&self.orion, &self.notifier, &self.entity_id).await;
        self.cycles.fetch_add(1, Ordering::SeqCst);
        outcome
    }

    /// Run forever
    pub async fn run(&self) {
        tracing::info!(
            entity_id = %self.entity_id,
            "[-] Service started. Monitoring Waste Container (interval: {})...",
            describe_interval(self.interval)
        );
        if !self.notifier.is_configured() {
            tracing::warn!("[!] WARNING: No Telegram credentials found. Please export TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID.");
        }

        loop {
            self.run_once().await;

            tracing::info!("[-] Sleeping for {}...", describe_interval(self.interval));
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Start the worker on the runtime
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }
}

/// Human-readable interval, e.g. "30 minutes"
pub fn describe_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    match secs {
        0 => format!("{} ms", interval.as_millis()),
        s if s % 3600 == 0 => plural(s / 3600, "hour"),
        s if s % 60 == 0 => plural(s / 60, "minute"),
        s => plural(s, "second"),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Broker client error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Notifier error: {0}")]
    Notifier(#[from] NotifierError),
}
