//! Tic-tac-toe: board types, rules, and move history.

mod error;
mod position;
mod rules;
mod state;
mod types;

pub use error::MoveError;
pub use position::Position;
pub use rules::{GameResult, GameStatus, LINES, Line, evaluate, is_full, winning_line};
pub use state::GameState;
pub use types::{Board, Player, Square};
