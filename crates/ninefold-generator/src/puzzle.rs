//! A carved puzzle: given cells over a known solution.

use std::fmt;

use ninefold_core::{CellValue, Position, SolvedGrid};

/// A playable puzzle derived from a [`SolvedGrid`].
///
/// Stores the solution it was carved from together with the set of given
/// positions. Given cells always show the solution's digit at that position,
/// so a `Puzzle` can never disagree with its own solution.
///
/// The [`Display`](fmt::Display) form is the 81-character problem string,
/// with `.` for blanked cells.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Position, SolvedGrid};
/// use ninefold_generator::Puzzle;
///
/// // Keep the first row, blank everything else
/// let givens = Position::ALL.into_iter().filter(|pos| pos.row() == 0);
/// let puzzle = Puzzle::new(SolvedGrid::base(), givens);
///
/// assert_eq!(puzzle.given_count(), 9);
/// assert!(puzzle.is_given(Position::new(0, 4)));
/// assert!(!puzzle.is_given(Position::new(1, 4)));
/// assert!(puzzle.to_string().starts_with("534678912."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: SolvedGrid,
    given: [bool; 81],
}

impl Puzzle {
    /// Creates a puzzle that keeps `givens` visible and blanks every other
    /// cell.
    ///
    /// Duplicate positions in `givens` are harmless.
    #[must_use]
    pub fn new(solution: SolvedGrid, givens: impl IntoIterator<Item = Position>) -> Self {
        let mut given = [false; 81];
        for pos in givens {
            given[pos.index()] = true;
        }
        Self { solution, given }
    }

    /// The solved grid this puzzle was carved from.
    #[must_use]
    pub fn solution(&self) -> &SolvedGrid {
        &self.solution
    }

    /// The digit shown at `pos`, or `None` when the cell is blanked.
    #[must_use]
    pub fn given(&self, pos: Position) -> CellValue {
        self.given[pos.index()].then(|| self.solution[pos])
    }

    /// Whether `pos` is a given cell.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.given[pos.index()]
    }

    /// Number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.given.iter().filter(|given| **given).count()
    }

    /// Number of blanked cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        81 - self.given_count()
    }

    /// Iterates over the positions of all given cells in row-major order.
    pub fn given_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_given(*pos))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.given(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
