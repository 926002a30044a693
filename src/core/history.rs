//! History recording and querying
//!
//! Wraps the configured [`HistoryStore`] with the service's degradation
//! policy: every store call is bounded by a timeout, writes never fail the
//! caller, and an unreachable store reads as an empty history.

use super::calculation::Calculation;
use super::operation::OperationKind;
use crate::config::HistoryConfig;
use crate::storage::{
    HistoryQuery, HistoryRecord, HistoryStore, NewHistoryRecord, SortField, SortOrder,
};
use crate::utils::error::{CalculatorError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Raw history query parameters, as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    /// Operation to filter by
    pub operation: Option<String>,
    /// `date` (default) or `result`
    pub sort_by: Option<String>,
    /// `desc` (default) or anything else for ascending
    pub sort_order: Option<String>,
}

impl HistoryParams {
    /// Resolve the parameters into a store query.
    ///
    /// Unrecognized values never fail: an unknown operation means no filter,
    /// an unknown sort field means `date` and any order other than `desc`
    /// means ascending.
    pub fn to_query(&self) -> HistoryQuery {
        let operation = self
            .operation
            .as_deref()
            .and_then(OperationKind::from_filter);

        let sort_by = match self.sort_by.as_deref() {
            Some("result") => SortField::Result,
            _ => SortField::Date,
        };

        let sort_order = match self.sort_order.as_deref() {
            None | Some("desc") => SortOrder::Desc,
            Some(_) => SortOrder::Asc,
        };

        HistoryQuery {
            operation,
            sort_by,
            sort_order,
        }
    }
}

/// History entry as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntryView {
    pub numbers: Vec<f64>,
    pub result: f64,
    pub operation: String,
    pub date: String,
}

impl From<HistoryRecord> for HistoryEntryView {
    fn from(record: HistoryRecord) -> Self {
        let date = record
            .date_formatted
            .unwrap_or_else(|| record.date.to_rfc3339());

        Self {
            numbers: record.numbers,
            result: record.result,
            operation: record.operation,
            date,
        }
    }
}

/// Produces zoned, formatted timestamps for new records
#[derive(Debug, Clone)]
pub struct HistoryClock {
    offset: FixedOffset,
    date_format: String,
}

impl HistoryClock {
    pub fn new(config: &HistoryConfig) -> Result<Self> {
        let offset = config.offset().map_err(CalculatorError::Config)?;
        config.check_date_format().map_err(CalculatorError::Config)?;

        Ok(Self {
            offset,
            date_format: config.date_format.clone(),
        })
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Render a timestamp with the configured format, `None` if it cannot be
    pub fn format(&self, date: &DateTime<FixedOffset>) -> Option<String> {
        let mut rendered = String::new();
        write!(rendered, "{}", date.format(&self.date_format)).ok()?;
        Some(rendered)
    }
}

/// History access with timeouts and graceful degradation
#[derive(Debug, Clone)]
pub struct HistoryService {
    store: Arc<dyn HistoryStore>,
    clock: HistoryClock,
    timeout: Duration,
}

impl HistoryService {
    pub fn new(store: Arc<dyn HistoryStore>, clock: HistoryClock, timeout: Duration) -> Self {
        Self {
            store,
            clock,
            timeout,
        }
    }

    pub fn store(&self) -> &Arc<dyn HistoryStore> {
        &self.store
    }

    /// Persist a successful calculation.
    ///
    /// Store failures are logged and dropped; the calculation result is
    /// returned to the client regardless.
    pub async fn record(&self, calculation: &Calculation) {
        let date = self.clock.now();
        let record = NewHistoryRecord {
            operation: calculation.operation,
            numbers: calculation.numbers.clone(),
            result: calculation.result,
            date_formatted: self.clock.format(&date),
            date,
        };

        match self.bounded(self.store.insert(record)).await {
            Ok(()) => debug!("Recorded {} in history", calculation.operation),
            Err(e) => warn!(
                "Failed to record {} in history, dropping record: {}",
                calculation.operation, e
            ),
        }
    }

    /// Read history for the given parameters.
    ///
    /// An unreachable store yields an empty list. Other store failures are
    /// returned to the caller.
    pub async fn query(&self, params: &HistoryParams) -> Result<Vec<HistoryEntryView>> {
        let query = params.to_query();

        match self.bounded(self.store.find(&query)).await {
            Ok(records) => Ok(records.into_iter().map(HistoryEntryView::from).collect()),
            Err(e) if e.is_unavailable() => {
                warn!("History store unavailable, returning empty history: {}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Remove all history records
    pub async fn clear(&self) -> Result<u64> {
        self.bounded(self.store.clear()).await
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| {
                CalculatorError::timeout(format!(
                    "history store did not answer within {:?}",
                    self.timeout
                ))
            })?
    }
}
