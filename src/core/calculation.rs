//! Single-operation pipeline: operand count, validation, evaluation

use super::arithmetic;
use super::operation::{OperationKind, OperationRequest};
use super::validation::{ValidationError, validate};
use serde::{Serialize, Serializer};

/// Outcome of a successful operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    /// Operation that was run, serialized as its label
    #[serde(serialize_with = "serialize_label")]
    pub operation: OperationKind,
    /// Operands in request order
    pub numbers: Vec<f64>,
    /// Computed result
    pub result: f64,
}

fn serialize_label<S: Serializer>(kind: &OperationKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.label())
}

/// Run one operation over `numbers`.
///
/// The operand count is checked first, then the operand constraints; nothing
/// is computed unless both pass.
pub fn calculate(kind: OperationKind, numbers: Vec<f64>) -> Result<Calculation, ValidationError> {
    let request = OperationRequest::new(numbers).map_err(|operands| {
        ValidationError::TooFewOperands {
            operation: kind,
            operands,
        }
    })?;

    validate(request.numbers(), kind)?;
    let result = arithmetic::evaluate(kind, &request);

    Ok(Calculation {
        operation: kind,
        numbers: request.into_numbers(),
        result,
    })
}
