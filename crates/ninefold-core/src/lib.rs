//! Core data types for the ninefold Sudoku engine.
//!
//! This crate defines the vocabulary shared by puzzle generation and game
//! session management: digits, board positions, and the solved grid a session
//! checks answers against.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9, plus the
//!   [`CellValue`] alias for a possibly-empty cell.
//! - [`position`]: Zero-based `(row, col)` board coordinates with flat-index
//!   and box-index mappings.
//! - [`grid`]: The complete, valid [`SolvedGrid`], including the built-in
//!   base grid, string parsing, validation, and validity-preserving
//!   shuffling.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Position, SolvedGrid};
//!
//! let grid = SolvedGrid::base();
//!
//! // Grids address cells by (row, col) coordinates
//! assert_eq!(grid[Position::new(0, 0)].value(), 5);
//!
//! // Grids round-trip through their 81-character string form
//! let copy: SolvedGrid = grid.to_string().parse().unwrap();
//! assert_eq!(copy, grid);
//! ```

pub mod digit;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::{CellValue, Digit},
    grid::{GridError, SolvedGrid},
    position::Position,
};
