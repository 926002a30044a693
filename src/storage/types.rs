//! Type definitions for history storage

use crate::core::operation::OperationKind;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Record of a successful operation, as handed to a store
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryRecord {
    /// Operation that produced the result
    pub operation: OperationKind,
    /// Operands in request order
    pub numbers: Vec<f64>,
    /// Computed result
    pub result: f64,
    /// Write time in the configured zone
    pub date: DateTime<FixedOffset>,
    /// Display rendering of `date`, fixed at write time
    pub date_formatted: Option<String>,
}

/// Record as read back from a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Store-assigned id, increasing with insertion order
    pub id: i64,
    /// Operation label (`sum`, `multiplication`, ...)
    pub operation: String,
    pub numbers: Vec<f64>,
    pub result: f64,
    pub date: DateTime<FixedOffset>,
    pub date_formatted: Option<String>,
}

/// Field history is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Result,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filter and ordering for a history read.
///
/// Records with equal sort values keep insertion order in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryQuery {
    /// Restrict to one operation, `None` for all
    pub operation: Option<OperationKind>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}
