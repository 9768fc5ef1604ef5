//! Strictly N-toe - console tic-tac-toe with an adjustable winning run.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::IsTerminal;
use strictly_ntoe::{ConsoleError, GameConfig, GameLoop, StreamConsole};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    run(cli)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Plays games on stdin/stdout until the players quit.
#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let config = config.merge(cli.size, cli.condition, cli.no_color, cli.no_clear);
    let presets = config.presets().context("Invalid board presets")?;

    let interactive = std::io::stdin().is_terminal();
    let console = StreamConsole::stdio(config.console_settings(interactive));
    let mut game_loop = GameLoop::new(console, presets);

    match game_loop.run() {
        Ok(outcomes) => {
            info!(games = outcomes.len(), "Exiting");
            Ok(())
        }
        Err(ConsoleError::Closed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(err) => Err(anyhow::Error::new(err).context("Console failure")),
    }
}
