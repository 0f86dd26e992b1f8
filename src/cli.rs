//! Command-line interface for king_of_the_hill.

use clap::Parser;
use std::path::PathBuf;

/// King of the Hill - hold the center to win
#[derive(Parser, Debug)]
#[command(name = "king_of_the_hill")]
#[command(about = "Two-player real-time terminal game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with grid_size, zone_size and win_seconds
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Side length of the grid (odd, at least 3)
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Side length of the hill (odd, smaller than the grid)
    #[arg(long)]
    pub zone_size: Option<usize>,

    /// Seconds the hill must be held to win
    #[arg(long)]
    pub win_seconds: Option<f64>,

    /// Where to write logs (stdout belongs to the board)
    #[arg(long, default_value = "king_of_the_hill.log")]
    pub log_file: PathBuf,
}
