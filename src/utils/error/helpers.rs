//! Helper functions for creating and classifying errors

use super::types::CalculatorError;
use sea_orm::DbErr;

impl CalculatorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable(message.into())
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error means the history store is out of reach.
    ///
    /// Callers degrade on these (drop writes, answer reads with nothing)
    /// instead of failing the request.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::StoreUnavailable(_) | Self::Timeout(_) => true,
            Self::Database(db_err) => matches!(
                db_err,
                DbErr::Conn(_) | DbErr::ConnectionAcquire(_)
            ),
            _ => false,
        }
    }
}
