//! Storage layer for the calculator
//!
//! This module provides persistence for the operation history.

/// Database storage module
pub mod database;
/// In-memory history store
pub mod memory;
/// Null-object history store
pub mod null;
/// Shared storage types
pub mod types;

pub use memory::MemoryHistoryStore;
pub use null::NullHistoryStore;
pub use types::{HistoryQuery, HistoryRecord, NewHistoryRecord, SortField, SortOrder};

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Append-only, queryable store of operation history
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync + fmt::Debug {
    /// Short name of the backend, reported by the health endpoint
    fn backend(&self) -> &'static str;

    /// Persist one record as a single atomic insert
    async fn insert(&self, record: NewHistoryRecord) -> Result<()>;

    /// Read records matching the query's filter, in the query's order
    async fn find(&self, query: &HistoryQuery) -> Result<Vec<HistoryRecord>>;

    /// Remove every record, returning how many were removed
    async fn clear(&self) -> Result<u64>;

    /// Check that the backend answers
    async fn health_check(&self) -> Result<()>;
}

/// Storage health summary
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Backend name
    pub backend: &'static str,
    /// Whether the backend answered
    pub healthy: bool,
}

/// Owns the history store chosen at startup
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// History store
    pub history: Arc<dyn HistoryStore>,
    /// Upper bound for a health check
    timeout: Duration,
}

impl StorageLayer {
    /// Create the storage layer.
    ///
    /// A disabled database selects the in-memory store. A database that cannot
    /// be reached or migrated selects the null store, so the service still
    /// starts.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if !config.database.enabled {
            info!("Database disabled, keeping history in memory");
            return Ok(Self::from_store(Arc::new(MemoryHistoryStore::new()))
                .with_timeout(config.operation_timeout()));
        }

        debug!("Connecting to database");
        let connected = match database::Database::new(&config.database).await {
            Ok(db) => db.migrate().await.map(|_| db),
            Err(e) => Err(e),
        };

        let history: Arc<dyn HistoryStore> = match connected {
            Ok(db) => {
                info!("History store ready ({:?})", db.backend_type());
                Arc::new(db)
            }
            Err(e) => {
                warn!(
                    "History database unavailable, operations will not be recorded: {}",
                    e
                );
                Arc::new(NullHistoryStore)
            }
        };

        Ok(Self::from_store(history).with_timeout(config.operation_timeout()))
    }

    /// Wrap an existing store
    pub fn from_store(history: Arc<dyn HistoryStore>) -> Self {
        Self {
            history,
            timeout: StorageConfig::default().operation_timeout(),
        }
    }

    /// Bound health checks by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Health check for the history store.
    ///
    /// A store that does not answer within the timeout is reported unhealthy.
    pub async fn health_check(&self) -> StorageHealthStatus {
        let healthy = match tokio::time::timeout(self.timeout, self.history.health_check()).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!("History store health check failed: {}", e);
                false
            }
            Err(_) => {
                warn!(
                    "History store health check did not answer within {:?}",
                    self.timeout
                );
                false
            }
        };

        StorageHealthStatus {
            backend: self.history.backend(),
            healthy,
        }
    }
}
