//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod history;
pub mod logging;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use history::*;
pub use logging::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_database_url() -> String {
    "sqlite://data/calculator.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

/// Upper bound for a single history store call, in seconds
pub fn default_operation_timeout() -> u64 {
    5
}

pub fn default_timezone() -> String {
    "+00:00".to_string()
}

pub fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
