//! Batch dispatcher
//!
//! Runs a list of named operations in order. Each item goes through the same
//! calculation pipeline as a single request; a failing item is reported in
//! place and never stops the rest of the batch.

use super::calculation::{Calculation, calculate};
use super::history::HistoryService;
use super::operation::OperationKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Error reported for an operation name outside the recognized set
pub const INVALID_OPERATION: &str = "Invalid operation type";

/// One entry of a batch request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchItem {
    /// Operation name (`sum`, `sub`, `multiply`, ...)
    pub operation: String,
    /// Operands; a missing list is reported as too few operands
    #[serde(default)]
    pub numbers: Vec<f64>,
}

impl BatchItem {
    pub fn new(operation: impl Into<String>, numbers: Vec<f64>) -> Self {
        Self {
            operation: operation.into(),
            numbers,
        }
    }
}

/// Per-item result of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Success {
        operation: String,
        result: f64,
        numbers: Vec<f64>,
    },
    Failure {
        operation: String,
        error: String,
        operands: Vec<f64>,
    },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn operation(&self) -> &str {
        match self {
            Self::Success { operation, .. } | Self::Failure { operation, .. } => operation,
        }
    }
}

impl From<Calculation> for BatchOutcome {
    fn from(calc: Calculation) -> Self {
        Self::Success {
            operation: calc.operation.label().to_string(),
            result: calc.result,
            numbers: calc.numbers,
        }
    }
}

/// Resolve and compute one batch item without touching history
pub fn evaluate_item(item: BatchItem) -> Result<Calculation, BatchOutcome> {
    let Some(kind) = OperationKind::from_batch_name(&item.operation) else {
        return Err(BatchOutcome::Failure {
            operation: item.operation,
            error: INVALID_OPERATION.to_string(),
            operands: item.numbers,
        });
    };

    calculate(kind, item.numbers).map_err(|e| BatchOutcome::Failure {
        operation: e.operation().label().to_string(),
        error: e.to_string(),
        operands: e.operands().to_vec(),
    })
}

/// Runs batches against a history service
#[derive(Debug, Clone, Copy)]
pub struct BatchDispatcher<'a> {
    history: &'a HistoryService,
}

impl<'a> BatchDispatcher<'a> {
    pub fn new(history: &'a HistoryService) -> Self {
        Self { history }
    }

    /// Process items sequentially, returning one outcome per item in order.
    ///
    /// Only successful items are written to history.
    pub async fn run_batch(&self, items: Vec<BatchItem>) -> Vec<BatchOutcome> {
        let total = items.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            match evaluate_item(item) {
                Ok(calc) => {
                    self.history.record(&calc).await;
                    outcomes.push(BatchOutcome::from(calc));
                }
                Err(failure) => {
                    debug!("Batch item {} failed: {:?}", index, failure);
                    outcomes.push(failure);
                }
            }
        }

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!(
            "Batch processed: {} items, {} succeeded, {} failed",
            total,
            succeeded,
            total - succeeded
        );

        outcomes
    }
}
