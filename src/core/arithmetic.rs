//! Arithmetic engine
//!
//! Left-to-right reductions over a validated operand list. Callers run
//! [`validate`](super::validation::validate) first; nothing here checks for
//! zero divisors. Results past `f64::MAX` come out as infinity, which JSON
//! renders as `null`.

use super::operation::{OperationKind, OperationRequest};

/// Reduce the request's operands with the given operation
pub fn evaluate(kind: OperationKind, request: &OperationRequest) -> f64 {
    let numbers = request.numbers();
    match kind {
        OperationKind::Sum => sum(numbers),
        OperationKind::Subtract => subtract(numbers),
        OperationKind::Multiply => multiply(numbers),
        OperationKind::Divide => divide(numbers),
    }
}

pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, n| acc + n)
}

pub fn subtract(numbers: &[f64]) -> f64 {
    reduce_from_first(numbers, |acc, n| acc - n)
}

pub fn multiply(numbers: &[f64]) -> f64 {
    numbers.iter().fold(1.0, |acc, n| acc * n)
}

pub fn divide(numbers: &[f64]) -> f64 {
    reduce_from_first(numbers, |acc, n| acc / n)
}

fn reduce_from_first(numbers: &[f64], op: impl Fn(f64, f64) -> f64) -> f64 {
    match numbers.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, n| op(acc, *n)),
        None => 0.0,
    }
}
