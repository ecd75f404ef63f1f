//! Puzzle generation for the ninefold engine.
//!
//! A puzzle is carved out of a known [`SolvedGrid`](ninefold_core::SolvedGrid)
//! by blanking a difficulty-dependent number of cells, chosen uniformly at
//! random without replacement. The solved grid stays attached to the carved
//! [`Puzzle`] as its one reference solution; nothing here verifies that the
//! puzzle cannot be completed some other way.
//!
//! # Overview
//!
//! - [`difficulty`]: The [`Difficulty`] levels and their cell-removal table.
//! - [`puzzle`]: The carved [`Puzzle`], pairing given cells with the solution
//!   they came from.
//! - [`generator`]: The [`PuzzleGenerator`] carve algorithm, with injectable
//!   randomness for deterministic output.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::SolvedGrid;
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(SolvedGrid::base());
//! let puzzle = generator.generate_with_seed(Difficulty::Medium, 7);
//!
//! assert_eq!(puzzle.given_count(), 35);
//! assert_eq!(puzzle.blank_count(), 46);
//! ```

pub mod difficulty;
pub mod generator;
pub mod puzzle;

// Re-export commonly used types
pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generator::PuzzleGenerator,
    puzzle::Puzzle,
};
