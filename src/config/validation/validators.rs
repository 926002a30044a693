//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.storage
            .validate()
            .map_err(|e| format!("Storage config error: {}", e))?;
        self.history
            .validate()
            .map_err(|e| format!("History config error: {}", e))?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err("CORS cannot allow all origins (*) when credentials are enabled for security reasons".to_string());
        }
        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.operation_timeout == 0 {
            return Err("Store operation timeout must be greater than 0".to_string());
        }

        if self.database.enabled {
            self.database.validate()?;
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let supported = ["sqlite:", "postgres://", "postgresql://"];
        if !supported.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err("Only SQLite and PostgreSQL databases are supported".to_string());
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for HistoryConfig {
    fn validate(&self) -> Result<(), String> {
        self.offset()?;
        self.check_date_format()
    }
}
