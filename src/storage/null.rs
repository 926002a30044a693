//! Null-object history store
//!
//! Stands in for the database when it cannot be reached at startup, so the
//! arithmetic endpoints stay available. Writes are discarded and reads are
//! always empty.

use super::HistoryStore;
use super::types::{HistoryQuery, HistoryRecord, NewHistoryRecord};
use crate::utils::error::Result;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct NullHistoryStore;

#[async_trait::async_trait]
impl HistoryStore for NullHistoryStore {
    fn backend(&self) -> &'static str {
        "null"
    }

    async fn insert(&self, record: NewHistoryRecord) -> Result<()> {
        debug!("Discarding history record for {}", record.operation);
        Ok(())
    }

    async fn find(&self, _query: &HistoryQuery) -> Result<Vec<HistoryRecord>> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<u64> {
        Ok(0)
    }

    async fn health_check(&self) -> Result<()> {
        Err(crate::utils::error::CalculatorError::store_unavailable(
            "running without a history store",
        ))
    }
}
