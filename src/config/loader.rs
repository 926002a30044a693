//! Configuration loading utilities
//!
//! Environment variables layered over a file or default configuration.

use super::models::*;
use crate::utils::error::{CalculatorError, Result};
use std::env;
use tracing::debug;

impl ServiceConfig {
    /// Overlay settings taken from environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| env::var(key).ok())
    }

    /// Overlay settings from an arbitrary variable source
    pub(crate) fn apply_vars<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server configuration
        if let Some(host) = var("CALCULATOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("CALCULATOR_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| CalculatorError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = var("CALCULATOR_WORKERS") {
            self.server.workers = Some(workers.parse().map_err(|e| {
                CalculatorError::Config(format!("Invalid workers count: {}", e))
            })?);
        }

        // Database configuration
        if let Some(db_url) = var("DATABASE_URL") {
            self.storage.database.url = db_url;
            self.storage.database.enabled = true;
        }
        if let Some(max_conn) = var("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections = max_conn.parse().map_err(|e| {
                CalculatorError::Config(format!("Invalid max connections: {}", e))
            })?;
        }

        // History configuration
        if let Some(timezone) = var("HISTORY_TIMEZONE") {
            self.history.timezone = timezone;
        }

        // Logging configuration
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                other => {
                    return Err(CalculatorError::Config(format!(
                        "Invalid log format: {}",
                        other
                    )));
                }
            };
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
