//! Error types for the calculator service

use crate::core::validation::ValidationError;
use thiserror::Error;

/// Result type alias for the calculator service
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Main error type for the calculator service
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The history store could not be reached or did not answer in time
    #[error("History store unavailable: {0}")]
    StoreUnavailable(String),

    /// Operand validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request bodies
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
