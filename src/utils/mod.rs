//! Utility modules for the calculator service
//!
//! - **error**: Error types and HTTP error mapping
//! - **logging**: Console logging setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use logging::init_logging;
