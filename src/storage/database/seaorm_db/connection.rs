use crate::config::DatabaseConfig;
use crate::utils::error::{CalculatorError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        if config.url.starts_with("sqlite://") {
            Self::ensure_sqlite_dir(&config.url)?;
        }

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt).await.map_err(|e| {
            warn!("Database connection failed: {}", e);
            CalculatorError::Database(e)
        })?;

        let backend_type = DatabaseBackendType::from_url(&config.url);
        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Create the parent directory of a file-backed SQLite database
    fn ensure_sqlite_dir(url: &str) -> Result<()> {
        let path = url
            .trim_start_matches("sqlite://")
            .split('?')
            .next()
            .unwrap_or_default();

        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CalculatorError::internal(format!("Failed to create data directory: {}", e))
                })?;
            }
        }
        Ok(())
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            CalculatorError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Health check
    pub async fn ping(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::History::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(CalculatorError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}
