// Module declarations
mod connection;
mod history_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
