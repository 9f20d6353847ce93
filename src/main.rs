//! XO - styled terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use xo_tui::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    xo_tui::tui::run(&cli)
}
