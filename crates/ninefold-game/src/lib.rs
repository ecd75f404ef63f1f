//! Game session management for ninefold puzzles.
//!
//! This crate drives a single Sudoku session. A [`PuzzleEngine`] owns the
//! live board derived from a carved [`Puzzle`](ninefold_generator::Puzzle),
//! validates player edits, serves hints, and records every change in an
//! undo/redo history. Completion is judged against the one solved grid the
//! puzzle was carved from.
//!
//! # Overview
//!
//! - [`engine`]: The [`PuzzleEngine`] façade and the [`SessionStatus`] state
//!   machine.
//! - [`board`]: Per-cell state ([`CellState`]) as seen by render layers.
//! - [`options`]: Behavior switches, currently the [`HintPolicy`].
//! - [`error`]: The recoverable [`GameError`] kinds.
//!
//! # Examples
//!
//! ```
//! use ninefold_game::PuzzleEngine;
//! use ninefold_generator::Difficulty;
//!
//! let mut engine = PuzzleEngine::new_game(Difficulty::Easy);
//!
//! // Fill one cell from the solution, then take it back
//! let hint = engine.hint()?;
//! assert_eq!(engine.cell(hint.position).value(), Some(hint.digit));
//! assert!(engine.undo());
//! assert!(engine.cell(hint.position).is_empty());
//! # Ok::<(), ninefold_game::GameError>(())
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod options;

mod history;

// Re-export commonly used types
pub use self::{
    board::CellState,
    engine::{Hint, PuzzleEngine, SessionStatus},
    error::GameError,
    options::{EngineOptions, HintPolicy},
};
