//! # calculator-rs
//!
//! Arithmetic HTTP service: sum, subtract, multiply and divide over lists of
//! two or more numbers, a batch endpoint with per-item outcomes, and a
//! queryable history of every successful operation.
//!
//! ## Features
//!
//! - **Operand validation**: negative operands and zero divisors are rejected
//!   with a structured error naming the operation and echoing the operands
//! - **Batch dispatch**: items run in order; a failing item never stops the batch
//! - **History**: filter by operation, sort by date or result
//! - **Graceful degradation**: an unreachable history store never breaks arithmetic
//!
//! ## Library Use
//!
//! ```rust,no_run
//! use calculator_rs::{Config, OperationKind, Calculator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let calculator = Calculator::new(Config::default()).await?;
//!     let calculation = calculator
//!         .calculate(OperationKind::Divide, vec![100.0, 2.0, 5.0])
//!         .await?;
//!     println!("{} = {}", calculation.operation, calculation.result);
//!     Ok(())
//! }
//! ```
//!
//! ## Service Mode
//!
//! ```rust,no_run
//! use calculator_rs::{Config, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/calculator.yaml").await?;
//!     let service = Service::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::{
    BatchItem, BatchOutcome, Calculation, Calculator, HistoryEntryView, HistoryParams,
    OperationKind, ValidationError,
};
pub use utils::error::{CalculatorError, Result};

use tracing::info;

/// The calculator service: configuration plus a ready HTTP server
pub struct Service {
    config: Config,
    server: server::HttpServer,
}

impl Service {
    /// Create a new service instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating calculator service");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the service until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting calculator service v{}", VERSION);
        info!(
            "Listening on {}, history timezone {}",
            self.config.server().address(),
            self.config.history().timezone
        );

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("CALCULATOR_BUILD_TIME"),
            git_hash: env!("CALCULATOR_GIT_HASH"),
        }
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
