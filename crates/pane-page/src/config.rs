//! Behavior configuration
//!
//! Defaults carry the fixed element identifiers the dashboard markup
//! uses and the 5-second alert dismiss delay. Embedders with different
//! markup override per field.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the dashboard behaviors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Delay before non-important alerts are auto-dismissed
    pub alert_dismiss_delay_ms: u64,
    /// Element id of the clipboard feedback toast
    pub toast_id: String,
    /// Element id of the welcome message text input
    pub welcome_text_id: String,
    /// Element id of the text color input
    pub text_color_id: String,
    /// Element id of the font size input
    pub font_size_id: String,
    /// Element id of the welcome preview target
    pub welcome_preview_id: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_delay_ms: 5000,
            toast_id: "copyToast".to_string(),
            welcome_text_id: "welcome_text".to_string(),
            text_color_id: "text_color".to_string(),
            font_size_id: "font_size".to_string(),
            welcome_preview_id: "welcome_preview_text".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// The dismiss delay as a `Duration`
    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_delay_ms)
    }
}
