//! Operand validation

use super::operation::OperationKind;
use thiserror::Error;

/// Reasons an operand list is rejected before computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Negative numbers are not allowed.")]
    NegativeOperand {
        operation: OperationKind,
        operands: Vec<f64>,
    },

    #[error("Division by zero is not allowed.")]
    DivisionByZero {
        operation: OperationKind,
        operands: Vec<f64>,
    },

    #[error("At least 2 numbers are required.")]
    TooFewOperands {
        operation: OperationKind,
        operands: Vec<f64>,
    },
}

impl ValidationError {
    pub fn operation(&self) -> OperationKind {
        match self {
            Self::NegativeOperand { operation, .. }
            | Self::DivisionByZero { operation, .. }
            | Self::TooFewOperands { operation, .. } => *operation,
        }
    }

    pub fn operands(&self) -> &[f64] {
        match self {
            Self::NegativeOperand { operands, .. }
            | Self::DivisionByZero { operands, .. }
            | Self::TooFewOperands { operands, .. } => operands,
        }
    }
}

/// Check operand constraints for `kind`.
///
/// Negative operands are rejected for every kind and take precedence over a
/// zero divisor. Only positions after the first are divisors.
pub fn validate(numbers: &[f64], kind: OperationKind) -> Result<(), ValidationError> {
    if numbers.iter().any(|n| *n < 0.0) {
        return Err(ValidationError::NegativeOperand {
            operation: kind,
            operands: numbers.to_vec(),
        });
    }

    if kind == OperationKind::Divide && numbers.iter().skip(1).any(|n| *n == 0.0) {
        return Err(ValidationError::DivisionByZero {
            operation: kind,
            operands: numbers.to_vec(),
        });
    }

    Ok(())
}
