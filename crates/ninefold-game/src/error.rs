//! Errors reported by the puzzle engine.

use derive_more::{Display, Error};
use ninefold_core::Position;

/// An error from a [`PuzzleEngine`](crate::PuzzleEngine) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given and cannot be edited.
    #[display("cannot edit the given cell at {position}")]
    InvalidPosition {
        /// The position of the given cell.
        position: Position,
    },
    /// The supplied value is outside `1..=9`.
    #[display("invalid cell value: {value}")]
    InvalidValue {
        /// The rejected raw value.
        value: u8,
    },
    /// Every cell already holds a digit, so no hint can be placed.
    #[display("no hints available: the board has no empty cells")]
    NoHintsAvailable,
}
