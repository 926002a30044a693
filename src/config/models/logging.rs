//! Logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Output format of the console log sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level; "debug" enables debug output, anything else means info
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Console output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Effective filter directive for this crate's level
    pub fn directive(&self) -> &'static str {
        if self.level.eq_ignore_ascii_case("debug") {
            "debug"
        } else {
            "info"
        }
    }
}
