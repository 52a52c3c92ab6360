//! Tic-tac-toe with time travel, played in the terminal.
//!
//! The game keeps every board snapshot since the start. Any earlier move can
//! be revisited from the move list, and playing from there starts a new
//! branch that replaces the moves after it.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns a [`Board`] into a [`GameResult`]
//! - **History**: [`GameState`] holds the snapshots and the current move
//! - **View**: [`App`] and [`draw`] render the state and map input onto it
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.result().status(), GameStatus::Won(Player::X));
//!
//! game.jump_to(1).unwrap();
//! game.play(8).unwrap();
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, GameResult, GameState, GameStatus, LINES, Line, MoveError, Player, Position, Square,
    evaluate, is_full, winning_line,
};

// Crate-level exports - Terminal UI
pub use tui::{
    App, Control, Focus, ViewLayout, digit_position, draw, move_cursor, move_label, run_app,
    run_tui, status_text,
};
