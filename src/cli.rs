//! Command-line interface for tictactoe_replay.

use crate::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Tic-tac-toe in the terminal, with a move list you can jump back through
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Loads the config file (if present) and applies command-line overrides.
    #[instrument(skip(self), fields(config = %self.config.display()))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load_or_default(&self.config)?;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if let Some(level) = &self.log_level {
            config = config.with_log_filter(level.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        Ok(config)
    }
}
