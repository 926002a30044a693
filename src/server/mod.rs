//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod routes;

mod handlers;
pub mod server;
pub mod state;
mod utils;

pub use handlers::{HealthStatus, health_check};
pub use server::HttpServer;
pub use state::AppState;
