//! Root service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Root of the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// History storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// History timestamp configuration
    #[serde(default)]
    pub history: HistoryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
