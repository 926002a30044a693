//! calculator-rs - arithmetic HTTP service with operation history

use calculator_rs::utils::init_logging;
use calculator_rs::{Config, Result, Service};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "calculator", version, about)]
struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        env = "CALCULATOR_CONFIG",
        default_value = "config/calculator.yaml"
    )]
    config: PathBuf,

    /// Address to listen on, overrides the configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let dotenv = dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli, dotenv).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the bind error's line breaks
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, dotenv: Option<PathBuf>) -> Result<()> {
    let config_found = tokio::fs::try_exists(&cli.config).await.unwrap_or(false);
    let mut config = if config_found {
        Config::from_file(&cli.config).await?
    } else {
        Config::default()
    };
    config.apply_env_overrides()?;

    if let Some(host) = cli.host {
        config.service.server.host = host;
    }
    if let Some(port) = cli.port {
        config.service.server.port = port;
    }
    config.validate()?;

    init_logging(config.logging())?;

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    if config_found {
        info!("Configuration loaded from {}", cli.config.display());
    } else {
        info!(
            "Configuration file {} not found, using defaults",
            cli.config.display()
        );
    }

    Service::new(config).await?.run().await
}
