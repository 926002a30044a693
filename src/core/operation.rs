//! Operation kinds and operand lists

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operation supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Sum,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    /// All kinds, in endpoint order
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Sum,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Resolve a batch operation name, accepting the short synonyms.
    ///
    /// Matching is exact: batch names are lowercase.
    pub fn from_batch_name(name: &str) -> Option<Self> {
        match name {
            "sum" => Some(Self::Sum),
            "subtract" | "sub" => Some(Self::Subtract),
            "multiply" | "mul" => Some(Self::Multiply),
            "divide" | "div" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Resolve a history filter value, case-insensitively.
    ///
    /// Accepts the stored label (`multiplication`) as well as the endpoint
    /// name (`multiply`).
    pub fn from_filter(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == value || kind.endpoint() == value)
    }

    /// Name stored in history and echoed in responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Subtract => "subtract",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }

    /// Path segment of the single-operation endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operand list with at least [`OperationRequest::MIN_OPERANDS`] numbers
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    numbers: Vec<f64>,
}

impl OperationRequest {
    pub const MIN_OPERANDS: usize = 2;

    /// Wrap an operand list, handing it back untouched if it is too short
    pub fn new(numbers: Vec<f64>) -> Result<Self, Vec<f64>> {
        if numbers.len() < Self::MIN_OPERANDS {
            return Err(numbers);
        }
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    pub fn into_numbers(self) -> Vec<f64> {
        self.numbers
    }
}
