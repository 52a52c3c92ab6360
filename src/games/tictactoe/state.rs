//! Move history and time travel.
//!
//! [`GameState`] owns every board snapshot since the start of the game and
//! a pointer to the one currently shown. Playing from a past snapshot
//! discards the snapshots after it and starts a new branch.

use super::error::MoveError;
use super::rules::{GameResult, evaluate};
use super::{Board, Player, Position, Square};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// History of board snapshots plus the current move pointer.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// Snapshot `i` is the board after move `i`; index 0 is the empty board.
    history: Vec<Board>,
    /// Index of the displayed snapshot.
    current_move: usize,
}

impl GameState {
    /// Creates a game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Index of the newest snapshot.
    pub fn last_move(&self) -> usize {
        self.history.len() - 1
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Evaluation of the displayed snapshot.
    pub fn result(&self) -> GameResult {
        evaluate(self.current_board())
    }

    /// Places the next player's mark at cell `index` (0-8).
    ///
    /// History after the current move is discarded before the new snapshot
    /// is appended, and the current move moves to the new tip.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range cells, occupied cells, and boards that are
    /// already won or drawn.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = *self.current_board();

        if !evaluate(&board).status().is_in_progress() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next = board.with(pos, Square::Occupied(player));

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.last_move();

        debug!(%player, position = %pos, move_number = self.current_move, "Mark placed");
        Ok(())
    }

    /// Shows snapshot `move_number` without changing history.
    ///
    /// # Errors
    ///
    /// Rejects indices past the newest snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        let last = self.last_move();
        if move_number > last {
            return Err(MoveError::MoveOutOfRange {
                requested: move_number,
                last,
            });
        }
        self.current_move = move_number;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
