//! Core functionality for the calculator
//!
//! This module contains the operation pipeline, the batch dispatcher and the
//! history service.

pub mod arithmetic;
pub mod batch;
pub mod calculation;
pub mod history;
pub mod operation;
pub mod validation;

pub use batch::{BatchDispatcher, BatchItem, BatchOutcome};
pub use calculation::{Calculation, calculate};
pub use history::{HistoryClock, HistoryEntryView, HistoryParams, HistoryService};
pub use operation::{OperationKind, OperationRequest};
pub use validation::ValidationError;

use crate::config::Config;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Main calculator struct tying the pipeline to its history store
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Service configuration
    config: Arc<Config>,
    /// Storage layer
    storage: StorageLayer,
    /// History access
    history: HistoryService,
}

impl Calculator {
    /// Create a calculator, connecting storage as configured
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing calculator");

        debug!("Initializing storage layer");
        let storage = StorageLayer::new(config.storage()).await?;

        Self::with_storage(config, storage)
    }

    /// Create a calculator over an already built storage layer
    pub fn with_storage(config: Config, storage: StorageLayer) -> Result<Self> {
        let storage = storage.with_timeout(config.storage().operation_timeout());
        let clock = HistoryClock::new(config.history())?;
        let history = HistoryService::new(
            storage.history.clone(),
            clock,
            config.storage().operation_timeout(),
        );

        Ok(Self {
            config: Arc::new(config),
            storage,
            history,
        })
    }

    /// Run one operation and record it on success
    pub async fn calculate(
        &self,
        kind: OperationKind,
        numbers: Vec<f64>,
    ) -> std::result::Result<Calculation, ValidationError> {
        let calculation = calculate(kind, numbers)?;
        self.history.record(&calculation).await;
        Ok(calculation)
    }

    /// Run a batch, one outcome per item
    pub async fn run_batch(&self, items: Vec<BatchItem>) -> Vec<BatchOutcome> {
        BatchDispatcher::new(&self.history).run_batch(items).await
    }

    /// Read history
    pub async fn history_entries(&self, params: &HistoryParams) -> Result<Vec<HistoryEntryView>> {
        self.history.query(params).await
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get storage layer
    pub fn storage(&self) -> &StorageLayer {
        &self.storage
    }

    /// Get history service
    pub fn history(&self) -> &HistoryService {
        &self.history
    }
}
