//! Per-cell state on the live board.

use derive_more::IsVariant;
use ninefold_core::{CellValue, Digit, Position};
use ninefold_generator::Puzzle;

/// The state of one board cell.
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
/// use ninefold_game::CellState;
///
/// let cell = CellState::Filled(Digit::D5);
/// assert!(cell.is_filled());
/// assert_eq!(cell.value(), Some(Digit::D5));
/// assert_eq!(CellState::Empty.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A fixed cell carved into the puzzle; never editable.
    Given(Digit),
    /// A digit the player entered, directly or through a hint.
    Filled(Digit),
    /// No digit yet.
    Empty,
}

impl CellState {
    /// The digit shown in this cell, or `None` when empty.
    #[must_use]
    pub const fn value(self) -> CellValue {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

/// The live 81-cell board of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Board {
    cells: [CellState; 81],
}

impl Board {
    pub(crate) fn new(puzzle: &Puzzle) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in puzzle.given_positions() {
            cells[pos.index()] = CellState::Given(puzzle.solution()[pos]);
        }
        Self { cells }
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    pub(crate) fn set(&mut self, pos: Position, value: CellValue) {
        debug_assert!(!self.cells[pos.index()].is_given());
        self.cells[pos.index()] = match value {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
    }

    pub(crate) fn promote_to_given(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = CellState::Given(digit);
    }
}
