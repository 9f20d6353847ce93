//! Command-line interface for xo_tui.

use clap::Parser;
use std::path::PathBuf;

/// XO - styled terminal tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "xo_tui")]
#[command(about = "Terminal tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start in two-player mode instead of playing the computer
    #[arg(long)]
    pub two_players: bool,

    /// Log file path (the terminal is in raw mode, so logs go to a file)
    #[arg(long, default_value = "xo_tui.log")]
    pub log_file: PathBuf,
}
