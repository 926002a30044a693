//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::Calculator;

/// HTTP server state shared across handlers
///
/// Cloned into every worker; the calculator holds its store behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Operation pipeline and history access
    pub calculator: Calculator,
}

impl AppState {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        self.calculator.config()
    }
}
