//! Common test utilities for calculator-rs
//!
//! - In-memory SQLite database support
//! - Application fixtures over each history backend
//! - Custom assertions

pub mod assertions;
pub mod database;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{BatchFactory, TestApp};
