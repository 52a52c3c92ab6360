//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. [`evaluate`] combines win
//! and draw detection into the derived [`GameResult`] that the rest of the
//! crate consults; nothing here is ever stored.

pub mod draw;
pub mod win;

use super::{Board, Player, Position};
use tracing::{instrument, trace};

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether new marks may be placed.
    pub fn is_in_progress(self) -> bool {
        self == GameStatus::InProgress
    }
}

/// Outcome of evaluating a board: status plus the winning line, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    status: GameStatus,
    winning_line: Option<Line>,
}

impl GameResult {
    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winning player, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Positions of the winning line; empty unless the game was won.
    pub fn winning_cells(&self) -> &[Position] {
        match &self.winning_line {
            Some(line) => line,
            None => &[],
        }
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_cells().contains(&pos)
    }
}

/// Evaluates a board: first completed line wins, then a full board draws,
/// otherwise the game is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    let result = if let Some((player, line)) = winning_line(board) {
        GameResult {
            status: GameStatus::Won(player),
            winning_line: Some(line),
        }
    } else if is_full(board) {
        GameResult {
            status: GameStatus::Draw,
            winning_line: None,
        }
    } else {
        GameResult {
            status: GameStatus::InProgress,
            winning_line: None,
        }
    };
    trace!(status = ?result.status, "Board evaluated");
    result
}
