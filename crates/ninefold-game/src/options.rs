//! Engine configuration.

/// How a revealed hint digit is placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintPolicy {
    /// The hint is a normal move: it lands as an editable cell and is
    /// recorded in the history, so it can be undone or overwritten.
    #[default]
    Editable,
    /// The hint becomes a given: the cell is locked, the move bypasses
    /// the history, and earlier history entries for that cell are
    /// dropped.
    Fixed,
}

/// Options applied when constructing a [`PuzzleEngine`](crate::PuzzleEngine).
///
/// # Examples
///
/// ```
/// use ninefold_core::SolvedGrid;
/// use ninefold_game::{EngineOptions, HintPolicy, PuzzleEngine};
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(SolvedGrid::base()).generate(Difficulty::Easy);
/// let options = EngineOptions::default().hint_policy(HintPolicy::Fixed);
/// let engine = PuzzleEngine::with_options(puzzle, options);
/// assert_eq!(engine.options(), options);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub(crate) hint_policy: HintPolicy,
}

impl EngineOptions {
    /// Sets the hint placement policy.
    #[must_use]
    pub fn hint_policy(mut self, hint_policy: HintPolicy) -> Self {
        self.hint_policy = hint_policy;
        self
    }
}
