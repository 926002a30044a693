//! History timestamp configuration

use super::*;
use chrono::FixedOffset;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// How record timestamps are zoned and rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Fixed UTC offset for record timestamps, e.g. "+00:00" or "-06:00"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime pattern for the stored display timestamp
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
        }
    }
}

impl HistoryConfig {
    /// Parse the configured offset
    pub fn offset(&self) -> Result<FixedOffset, String> {
        self.timezone
            .trim()
            .parse::<FixedOffset>()
            .map_err(|e| format!("Invalid history timezone '{}': {}", self.timezone, e))
    }

    /// Check that the date format contains only known specifiers
    pub fn check_date_format(&self) -> Result<(), String> {
        if self.date_format.trim().is_empty() {
            return Err("History date format cannot be empty".to_string());
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!(
                "Invalid history date format: {}",
                self.date_format
            ));
        }
        Ok(())
    }
}
