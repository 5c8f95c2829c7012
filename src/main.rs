//! CaseCoach - Consulting case interview practice CLI
//!
//! Main entry point for the CaseCoach application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use casecoach::cli::{Cli, Commands};
use casecoach::commands;
use casecoach::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { case } => {
            tracing::info!("Starting interview chat mode");
            if let Some(c) = &case {
                tracing::debug!("Using case type from CLI: {}", c);
            }
            commands::chat::run_chat(config, case).await?;
            Ok(())
        }
        Commands::Drill => {
            tracing::info!("Starting standalone drill");
            commands::drill::run_drill(config).await?;
            Ok(())
        }
        Commands::Cases => {
            commands::cases::run_cases();
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber
///
/// Respects `RUST_LOG` when set; otherwise defaults to warnings only, or
/// debug output for this crate when `--verbose` is given.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "casecoach=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
