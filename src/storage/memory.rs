//! In-process history store
//!
//! Used when the database is disabled in configuration. Records live only as
//! long as the process.

use super::HistoryStore;
use super::types::{HistoryQuery, HistoryRecord, NewHistoryRecord, SortField, SortOrder};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<HistoryRecord>,
    next_id: i64,
}

/// History store backed by a vector behind a lock
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    inner: RwLock<Inner>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compare(a: &HistoryRecord, b: &HistoryRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Result => a.result.total_cmp(&b.result),
    }
}

#[async_trait::async_trait]
impl HistoryStore for MemoryHistoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, record: NewHistoryRecord) -> Result<()> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        debug!("Storing history record {} ({})", id, record.operation);

        inner.records.push(HistoryRecord {
            id,
            operation: record.operation.label().to_string(),
            numbers: record.numbers,
            result: record.result,
            date: record.date,
            date_formatted: record.date_formatted,
        });
        Ok(())
    }

    async fn find(&self, query: &HistoryQuery) -> Result<Vec<HistoryRecord>> {
        let mut records: Vec<HistoryRecord> = {
            let inner = self.inner.read();
            inner
                .records
                .iter()
                .filter(|r| {
                    query
                        .operation
                        .is_none_or(|kind| r.operation == kind.label())
                })
                .cloned()
                .collect()
        };

        // sort_by is stable, so ties stay in insertion order
        match query.sort_order {
            SortOrder::Asc => records.sort_by(|a, b| compare(a, b, query.sort_by)),
            SortOrder::Desc => records.sort_by(|a, b| compare(b, a, query.sort_by)),
        }

        Ok(records)
    }

    async fn clear(&self) -> Result<u64> {
        let mut inner = self.inner.write();
        let removed = inner.records.len() as u64;
        inner.records.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
