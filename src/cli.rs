//! Command-line interface for strictly_ntoe.

use clap::Parser;
use std::path::PathBuf;

/// Strictly N-toe - tic-tac-toe with any board size and run length
#[derive(Parser, Debug)]
#[command(name = "strictly_ntoe")]
#[command(about = "Two-player N-in-a-row tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size for every game (skips the size prompt)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win (skips the condition prompt)
    #[arg(short = 'w', long)]
    pub condition: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Keep previous output instead of clearing the screen
    #[arg(long)]
    pub no_clear: bool,
}
