//! Alert rendering and delivery
//!
//! Turns an entity snapshot into a plain-text collection alert and forwards
//! it to a Telegram chat.

pub mod formatter;
pub mod notifier;

pub use formatter::{AlertMessage, TRACKED_ATTRIBUTES};
pub use notifier::{NotifierError, NotifyOutcome, TelegramNotifier};
