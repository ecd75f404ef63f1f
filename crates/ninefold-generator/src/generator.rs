//! Random cell-removal puzzle generation.

use ninefold_core::{Position, SolvedGrid};
use rand::{RngExt, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{Difficulty, Puzzle};

/// Carves playable puzzles out of one solved grid.
///
/// The generator owns the solution for a session and can carve any number of
/// puzzles from it. Carving blanks a difficulty-dependent number of cells,
/// chosen uniformly at random without replacement; the one solution the
/// puzzle was carved from remains attached as its reference answer, and no
/// uniqueness check is performed.
///
/// # Examples
///
/// ```
/// use ninefold_core::SolvedGrid;
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(SolvedGrid::base().shuffled());
/// let puzzle = generator.generate(Difficulty::Easy);
///
/// assert_eq!(puzzle.given_count(), 45);
/// assert_eq!(puzzle.solution(), generator.solution());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    solution: SolvedGrid,
}

impl PuzzleGenerator {
    /// Creates a generator that carves puzzles from `solution`.
    #[must_use]
    pub fn new(solution: SolvedGrid) -> Self {
        Self { solution }
    }

    /// The solved grid every generated puzzle is carved from.
    #[must_use]
    pub fn solution(&self) -> &SolvedGrid {
        &self.solution
    }

    /// Generates a puzzle using the thread-local RNG.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> Puzzle {
        self.generate_with_rng(difficulty, &mut rand::rng())
    }

    /// Generates a puzzle from a fixed seed.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: u64) -> Puzzle {
        self.generate_with_rng(difficulty, &mut Pcg64Mcg::seed_from_u64(seed))
    }

    /// Generates a puzzle, drawing cell choices from `rng`.
    ///
    /// Exactly `difficulty.removed_cells()` distinct positions end up blank.
    /// Candidate cells are drawn uniformly and draws that hit an
    /// already-blanked cell are rejected, so the blanked set is a uniform
    /// sample without replacement.
    #[must_use]
    pub fn generate_with_rng<R>(&self, difficulty: Difficulty, rng: &mut R) -> Puzzle
    where
        R: RngExt,
    {
        let remove_count = usize::from(difficulty.removed_cells());
        debug_assert!(remove_count > 0 && remove_count < 81);

        let mut removed = [false; 81];
        let mut count = 0;
        while count < remove_count {
            let index = rng.random_range(0..81);
            if !removed[index] {
                removed[index] = true;
                count += 1;
            }
        }

        let givens = Position::ALL
            .into_iter()
            .filter(|pos| !removed[pos.index()]);
        Puzzle::new(self.solution.clone(), givens)
    }
}

impl Default for PuzzleGenerator {
    /// A generator carving from the built-in base grid.
    fn default() -> Self {
        Self::new(SolvedGrid::base())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_carve_blanks_the_difficulty_count() {
        let generator = PuzzleGenerator::default();
        for difficulty in Difficulty::ALL {
            let puzzle = generator.generate_with_seed(difficulty, 99);
            assert_eq!(
                puzzle.blank_count(),
                usize::from(difficulty.removed_cells()),
                "{difficulty}"
            );
            assert_eq!(
                puzzle.given_count(),
                usize::from(difficulty.given_cells()),
                "{difficulty}"
            );
        }
    }

    #[test]
    fn test_same_seed_generates_the_same_puzzle() {
        let generator = PuzzleGenerator::default();
        let first = generator.generate_with_seed(Difficulty::Hard, 7);
        let second = generator.generate_with_seed(Difficulty::Hard, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_givens_always_match_the_solution() {
        let generator = PuzzleGenerator::new(SolvedGrid::base().shuffled_with_rng(
            &mut Pcg64Mcg::seed_from_u64(5),
        ));
        let puzzle = generator.generate_with_seed(Difficulty::Medium, 5);
        for pos in puzzle.given_positions() {
            assert_eq!(puzzle.given(pos), Some(generator.solution()[pos]));
        }
    }

    proptest! {
        #[test]
        fn carve_counts_hold_for_any_seed(seed in any::<u64>(), level in 0usize..4) {
            let difficulty = Difficulty::ALL[level];
            let puzzle = PuzzleGenerator::default().generate_with_seed(difficulty, seed);
            prop_assert_eq!(puzzle.blank_count(), usize::from(difficulty.removed_cells()));
        }
    }
}
