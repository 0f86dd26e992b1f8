//! King of the Hill - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use king_of_the_hill::{CrosstermKeys, GameConfig, RawModeGuard, TerminalRenderer, run_match};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so the board owns the terminal
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.grid_size, cli.zone_size, cli.win_seconds)?;

    info!(?config, "Starting King of the Hill");

    let outcome = {
        let _raw = RawModeGuard::enable()?;
        run_match(
            config,
            CrosstermKeys::default(),
            TerminalRenderer::new(std::io::stdout()),
        )
    };

    match outcome {
        Ok(outcome) => {
            match outcome.winner {
                Some(player) => println!("{} is king of the hill.", player),
                None => println!("Game stopped."),
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Match failed");
            Err(e.into())
        }
    }
}
