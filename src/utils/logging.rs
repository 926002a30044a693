//! Console logging setup

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{CalculatorError, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(config: &LoggingConfig) -> EnvFilter {
    let level = config.directive();
    EnvFilter::new(format!(
        "{level},actix_web={level},sqlx=warn,sea_orm=warn,sea_orm_migration=warn"
    ))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Must be called once,
/// before the server starts.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| CalculatorError::internal(format!("Failed to initialize logging: {}", e)))
}
