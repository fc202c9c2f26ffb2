//! Wastewatch: waste container fill-level alerts
//!
//! Polls an NGSI-LD context broker (Orion-LD) for a single waste container
//! entity, renders a plain-text collection alert and forwards it to a
//! Telegram chat, then sleeps and repeats.
//!
//! # Pipeline
//!
//! - **Fetch**: `GET /ngsi-ld/v1/entities/{id}` with `Accept: application/ld+json`
//! - **Format**: five tracked attributes, each a bare value or a `{value: ...}`
//!   property, falling back to `N/A`
//! - **Notify**: `POST /bot{token}/sendMessage` with `{chat_id, text}`
//!
//! Every failure is logged and swallowed; the next cycle is the only retry.
//!
//! # Example
//!
//! ```no_run
//! use wastewatch::config::MonitorConfig;
//! use wastewatch::monitor::MonitorWorker;
//!
//! # async fn run() -> Result<(), wastewatch::monitor::MonitorError> {
//! let config = MonitorConfig::from_env();
//! let worker = MonitorWorker::from_config(&config)?;
//! let outcome = worker.run_once().await;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod alerts;
pub mod config;
pub mod monitor;
pub mod orion;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use alerts::{AlertMessage, NotifyOutcome, TelegramNotifier};
pub use config::MonitorConfig;
pub use monitor::{run_cycle, CycleOutcome, MonitorWorker};
pub use orion::{EntitySnapshot, OrionClient};
