//! Monitor configuration
//!
//! Read once at startup from environment variables and passed explicitly to
//! every component afterwards.

use std::time::Duration;

pub const DEFAULT_ORION_HOST: &str = "172.21.32.104";
pub const DEFAULT_ORION_PORT: u16 = 1026;
pub const DEFAULT_ENTITY_ID: &str = "urn:ngsi-ld:WasteContainer:67-49-e4-49-70-22-00-28";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1800;

/// Complete monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub orion: OrionConfig,
    pub telegram: TelegramConfig,
    /// Delay between the end of one cycle and the start of the next
    pub poll_interval: Duration,
}

/// Context broker location and the monitored entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrionConfig {
    pub host: String,
    pub port: u16,
    pub entity_id: String,
}

/// Telegram bot credentials. Both are optional here; the notifier refuses to
/// send when either is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl MonitorConfig {
    /// Create configuration from environment variables
    ///
    /// ORION_HOST=172.21.32.104
    /// ORION_PORT=1026
    /// ENTITY_ID=urn:ngsi-ld:WasteContainer:...
    /// TELEGRAM_BOT_TOKEN=123456:ABC...
    /// TELEGRAM_CHAT_ID=-100123456
    /// POLL_INTERVAL_SECS=1800
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key/value lookup.
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("ORION_HOST").unwrap_or_else(|| DEFAULT_ORION_HOST.to_string());
        let port = get("ORION_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_ORION_PORT);
        let entity_id = get("ENTITY_ID").unwrap_or_else(|| DEFAULT_ENTITY_ID.to_string());

        let poll_interval_secs = get("POLL_INTERVAL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        Self {
            orion: OrionConfig {
                host,
                port,
                entity_id,
            },
            telegram: TelegramConfig {
                bot_token: get("TELEGRAM_BOT_TOKEN"),
                chat_id: get("TELEGRAM_CHAT_ID"),
            },
            poll_interval: Duration::from_secs(poll_interval_secs),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl OrionConfig {
    /// URL of the monitored entity on the broker
    pub fn entity_url(&self) -> String {
        format!(
            "http://{}:{}/ngsi-ld/v1/entities/{}",
            self.host, self.port, self.entity_id
        )
    }
}

impl TelegramConfig {
    /// Returns (token, chat id) when both are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token, chat_id))
            }
            _ => None,
        }
    }
}
