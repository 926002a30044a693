//! Configuration management for the calculator service
//!
//! This module handles loading, validation, and management of all service configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{CalculatorError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CalculatorError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let service: ServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| CalculatorError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Overlay environment variables and re-validate
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.service.apply_env()?;
        self.validate()
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get history configuration
    pub fn history(&self) -> &HistoryConfig {
        &self.service.history
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        Validate::validate(&self.service).map_err(CalculatorError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| CalculatorError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
