//! tictactoe_replay - terminal tic-tac-toe with move history.

use anyhow::Result;
use clap::Parser;
use tictactoe_replay::{Cli, run_tui};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may live there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    run_tui(config)
}
