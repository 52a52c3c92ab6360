//! Rejections produced by [`GameState`](super::GameState) operations.

use super::Position;

/// Error returned when a play or jump is rejected.
///
/// A rejected operation never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The requested history entry does not exist.
    #[display("Move #{requested} does not exist (history ends at #{last})")]
    MoveOutOfRange {
        /// Requested history index.
        requested: usize,
        /// Last valid history index.
        last: usize,
    },
}
