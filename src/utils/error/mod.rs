//! Error handling for the calculator service
//!
//! This module defines the crate-wide error type and its HTTP mapping.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorResponse, OperandErrorResponse, validation_status};
pub use types::{CalculatorError, Result};
