//! Telegram delivery for alerts

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;

use crate::config::TelegramConfig;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one delivery attempt, after logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Bot API answered 200
    Sent,
    /// Credentials missing, nothing was sent
    Skipped,
    /// Request failed or was rejected
    Failed(String),
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Notifier posting plain-text messages to a Telegram chat
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    credentials: TelegramConfig,
}

impl TelegramNotifier {
    /// Create a new notifier
    pub fn new(credentials: TelegramConfig) -> Result<Self, NotifierError> {
        Self::with_timeout(credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        credentials: TelegramConfig,
        timeout: Duration,
    ) -> Result<Self, NotifierError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifierError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_base: TELEGRAM_API_BASE.to_string(),
            credentials,
        })
    }

    /// Point the notifier at a different Bot API server
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether both credentials are present
    pub fn is_configured(&self) -> bool {
        self.credentials.credentials().is_some()
    }

    /// Send `text`, logging the outcome. Never returns an error.
    pub async fn notify(&self, text: &str) -> NotifyOutcome {
        match self.try_send(text).await {
            Ok(()) => {
                tracing::info!("[+] SUCCESS: Message sent!");
                NotifyOutcome::Sent
            }
            Err(NotifierError::MissingCredentials) => {
                tracing::error!("[!] ERROR: TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is missing.");
                tracing::error!("    Export both variables before starting the monitor.");
                NotifyOutcome::Skipped
            }
            Err(NotifierError::Api { status, body }) => {
                tracing::error!(status, "[!] TELEGRAM API ERROR: {}", body);
                NotifyOutcome::Failed(body)
            }
            Err(e) => {
                tracing::error!("[!] CONNECTION ERROR: {}", e);
                NotifyOutcome::Failed(e.to_string())
            }
        }
    }

    /// Send `text` to the configured chat
    pub async fn try_send(&self, text: &str) -> Result<(), NotifierError> {
        let (token, chat_id) = self
            .credentials
            .credentials()
            .ok_or(NotifierError::MissingCredentials)?;

        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let payload = SendMessage { chat_id, text };

        tracing::info!("[-] Sending to Telegram Chat ID: {}...", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifierError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(NotifierError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(chat_id = %chat_id, "Telegram notification sent");
        Ok(())
    }
}

/// Notifier errors
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Telegram bot token or chat id is missing")]
    MissingCredentials,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Telegram API returned status {status}: {body}")]
    Api { status: u16, body: String },
}
