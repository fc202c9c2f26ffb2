//! Plain-text alert rendering
//!
//! Plain text is used rather than Markdown so that attribute values containing
//! Markdown control characters can never make the Bot API reject the message.

use chrono::{Local, NaiveTime};

use crate::orion::EntitySnapshot;

pub const FILLING_LEVEL: &str = "fillingLevel";
pub const MAX_FILLING_LEVEL_THRESHOLD: &str = "maxFillingLevelThreshold";
pub const TEMPERATURE: &str = "temperature";
pub const BATTERY: &str = "battery";
pub const TILT_STATUS: &str = "tiltStatus";

/// Attributes rendered into every alert
pub const TRACKED_ATTRIBUTES: [&str; 5] = [
    FILLING_LEVEL,
    MAX_FILLING_LEVEL_THRESHOLD,
    TEMPERATURE,
    BATTERY,
    TILT_STATUS,
];

/// A rendered alert, one entry per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    lines: Vec<String>,
}

impl AlertMessage {
    /// Render an alert stamped with the current local time
    pub fn compose(entity_id: &str, snapshot: &EntitySnapshot) -> Self {
        Self::compose_at(entity_id, snapshot, Local::now().time())
    }

    /// Render an alert stamped with `time`
    pub fn compose_at(entity_id: &str, snapshot: &EntitySnapshot, time: NaiveTime) -> Self {
        let lines = vec![
            "🚨 URGENT: COLLECTION REQUIRED 🚨".to_string(),
            "The Waste Container has reached its capacity.".to_string(),
            String::new(),
            format!("ID: {}", entity_id),
            format!(
                "Fill Level: {} (Threshold: {})",
                snapshot.display(FILLING_LEVEL),
                snapshot.display(MAX_FILLING_LEVEL_THRESHOLD)
            ),
            String::new(),
            "--- Details ---".to_string(),
            format!("Temp: {} C", snapshot.display(TEMPERATURE)),
            format!("Battery: {}%", snapshot.display(BATTERY)),
            format!("Tilt: {}", snapshot.display(TILT_STATUS)),
            String::new(),
            format!("Time: {}", time.format("%H:%M:%S")),
        ];

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The message body as sent
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}
