//! The solved reference grid.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt, seq::SliceRandom};

use crate::{Digit, Position};

/// The completed grid every session starts from, in row-major order.
const BASE_VALUES: [[u8; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

/// Errors from constructing a [`SolvedGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, got {len}")]
    WrongLength {
        /// Number of cells supplied.
        len: usize,
    },
    /// A cell holds something other than a digit 1-9.
    #[display("invalid digit at {position}")]
    InvalidDigit {
        /// Position of the offending cell.
        position: Position,
    },
    /// A digit repeats within a row, column, or box.
    #[display("{digit} repeats at {position}")]
    Conflict {
        /// Position of the second occurrence.
        position: Position,
        /// The repeated digit.
        digit: Digit,
    },
}

/// A complete, valid Sudoku solution.
///
/// Every constructed grid satisfies row, column, and box uniqueness, and is
/// immutable afterwards. One `SolvedGrid` serves as the ground truth a game
/// session carves its puzzle from and checks answers against.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Position, SolvedGrid};
///
/// let grid = SolvedGrid::base();
/// assert_eq!(grid[Position::new(0, 2)].value(), 4);
///
/// // The string form lists all 81 digits in row-major order
/// let text = grid.to_string();
/// assert_eq!(text.len(), 81);
/// assert_eq!(text.parse::<SolvedGrid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    cells: [Digit; 81],
}

impl SolvedGrid {
    /// The built-in completed grid.
    ///
    /// Sessions that want variety derive a fresh solution from it with
    /// [`shuffled`](Self::shuffled) instead of constructing one from scratch.
    #[must_use]
    pub fn base() -> Self {
        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            let value = BASE_VALUES[usize::from(pos.row())][usize::from(pos.col())];
            cells[pos.index()] = Digit::from_value(value);
        }
        debug_assert!(Self::validate(&cells).is_ok());
        Self { cells }
    }

    /// Creates a grid from a 9x9 array of raw values, validating it fully.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDigit`] if a value is outside 1-9 and
    /// [`GridError::Conflict`] if a digit repeats within a row, column, or
    /// box. The reported position is the first offending cell in row-major
    /// scan order.
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            let digit = Digit::try_from_value(value)
                .ok_or(GridError::InvalidDigit { position: pos })?;
            cells[pos.index()] = digit;
        }
        Self::validate(&cells)?;
        Ok(Self { cells })
    }

    /// Returns the digit at `pos`.
    ///
    /// Equivalent to indexing, but returns the digit by value.
    #[must_use]
    pub fn digit(&self, pos: Position) -> Digit {
        self.cells[pos.index()]
    }

    /// Derives a fresh valid solution from this one using the thread-local
    /// RNG.
    ///
    /// See [`shuffled_with_rng`](Self::shuffled_with_rng).
    #[must_use]
    pub fn shuffled(&self) -> Self {
        self.shuffled_with_rng(&mut rand::rng())
    }

    /// Derives a fresh valid solution from this one, drawing from `rng`.
    ///
    /// Applies transformations that preserve Sudoku validity: relabeling the
    /// nine digits, permuting rows within each horizontal band, permuting
    /// columns within each vertical stack, and permuting whole bands and
    /// stacks. The result is always a valid solved grid.
    #[must_use]
    pub fn shuffled_with_rng<R>(&self, rng: &mut R) -> Self
    where
        R: RngExt,
    {
        let mut relabel = Digit::ALL;
        relabel.shuffle(rng);

        // Maps from target line to source line, box structure preserved.
        let rows = shuffled_lines(rng);
        let cols = shuffled_lines(rng);

        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            let source = Position::new(rows[usize::from(pos.row())], cols[usize::from(pos.col())]);
            cells[pos.index()] = relabel[usize::from(self[source].value()) - 1];
        }
        debug_assert!(Self::validate(&cells).is_ok());
        Self { cells }
    }

    fn validate(cells: &[Digit; 81]) -> Result<(), GridError> {
        let mut rows = [[false; 9]; 9];
        let mut cols = [[false; 9]; 9];
        let mut boxes = [[false; 9]; 9];
        for pos in Position::ALL {
            let digit = cells[pos.index()];
            let d = usize::from(digit.value()) - 1;
            for seen in [
                &mut rows[usize::from(pos.row())][d],
                &mut cols[usize::from(pos.col())][d],
                &mut boxes[usize::from(pos.box_index())][d],
            ] {
                if *seen {
                    return Err(GridError::Conflict {
                        position: pos,
                        digit,
                    });
                }
                *seen = true;
            }
        }
        Ok(())
    }
}

impl Index<Position> for SolvedGrid {
    type Output = Digit;

    fn index(&self, pos: Position) -> &Digit {
        &self.cells[pos.index()]
    }
}

impl fmt::Display for SolvedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.cells {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for SolvedGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(GridError::WrongLength { len });
        }
        let mut cells = [Digit::D1; 81];
        for (pos, c) in Position::ALL.into_iter().zip(s.chars()) {
            let digit = c
                .to_digit(10)
                .and_then(|value| u8::try_from(value).ok())
                .and_then(Digit::try_from_value)
                .ok_or(GridError::InvalidDigit { position: pos })?;
            cells[pos.index()] = digit;
        }
        Self::validate(&cells)?;
        Ok(Self { cells })
    }
}

fn shuffled_lines<R>(rng: &mut R) -> [u8; 9]
where
    R: RngExt,
{
    let mut bands = [0u8, 1, 2];
    bands.shuffle(rng);

    let mut lines = [0u8; 9];
    for (chunk, band) in lines.chunks_mut(3).zip(bands) {
        let mut within = [0u8, 1, 2];
        within.shuffle(rng);
        for (line, offset) in chunk.iter_mut().zip(within) {
            *line = band * 3 + offset;
        }
    }
    lines
}
