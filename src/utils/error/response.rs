//! HTTP response handling for errors

use super::types::CalculatorError;
use crate::core::validation::ValidationError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for CalculatorError {
    fn status_code(&self) -> StatusCode {
        match self {
            CalculatorError::Validation(e) => validation_status(e),
            CalculatorError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CalculatorError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CalculatorError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if let CalculatorError::Validation(e) = self {
            return HttpResponse::build(status_code).json(OperandErrorResponse::from(e));
        }

        let (code, message) = match self {
            CalculatorError::InvalidRequest(_) => ("INVALID_REQUEST", self.to_string()),
            CalculatorError::StoreUnavailable(_) => ("STORE_UNAVAILABLE", self.to_string()),
            CalculatorError::Timeout(_) => ("TIMEOUT", self.to_string()),
            CalculatorError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            CalculatorError::Database(_) => {
                ("DATABASE_ERROR", "Database operation failed".to_string())
            }
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        HttpResponse::build(status_code).json(ErrorResponse {
            error: message,
            code: code.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}

/// Status code for an operand validation failure
pub fn validation_status(error: &ValidationError) -> StatusCode {
    match error {
        ValidationError::NegativeOperand { .. } => StatusCode::BAD_REQUEST,
        ValidationError::DivisionByZero { .. } => StatusCode::FORBIDDEN,
        ValidationError::TooFewOperands { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Body returned when operands are rejected
#[derive(Debug, serde::Serialize)]
pub struct OperandErrorResponse {
    pub error: String,
    pub operation: String,
    pub operands: Vec<f64>,
}

impl From<&ValidationError> for OperandErrorResponse {
    fn from(error: &ValidationError) -> Self {
        Self {
            error: error.to_string(),
            operation: error.operation().label().to_string(),
            operands: error.operands().to_vec(),
        }
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub timestamp: i64,
}
