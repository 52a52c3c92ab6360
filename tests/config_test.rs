//! Tests for configuration loading and command-line overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tictactoe_replay::{Cli, TuiConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_defaults() {
    let config = TuiConfig::default();
    assert!(*config.mouse());
    assert!(*config.show_help());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.title(), "Tic-Tac-Toe");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("title = \"Lunch break\"\nmouse = false\n");
    let config = TuiConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config.title(), "Lunch break");
    assert!(!*config.mouse());
    assert!(*config.show_help());
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe_replay.log"));
}

#[test]
fn test_invalid_file_is_error() {
    let file = write_config("mouse = \"sometimes\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("log_filter = \"warn\"\nshow_help = false\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::parse_from([
        "tictactoe_replay",
        "--config",
        path.as_str(),
        "--log-level",
        "debug",
        "--log-file",
        "game.log",
        "--no-mouse",
    ]);

    let config = cli.resolve_config().expect("Valid config");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert!(!*config.mouse());
    assert!(!*config.show_help());
}
