//! The session façade: edits, hints, undo/redo, and completion checks.

use derive_more::IsVariant;
use ninefold_core::{CellValue, Digit, Position, SolvedGrid};
use ninefold_generator::{Difficulty, Puzzle, PuzzleGenerator};
use rand::RngExt;

use crate::{
    board::{Board, CellState},
    error::GameError,
    history::{Move, MoveHistory, MoveKind},
    options::{EngineOptions, HintPolicy},
};

/// Where a session stands after the most recent explicit check.
///
/// A session starts in progress and stays there through every edit, hint,
/// undo, and redo. Only [`PuzzleEngine::check`] moves it to
/// [`Solved`](Self::Solved) or [`Failed`](Self::Failed), and the next board
/// mutation puts it back in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum SessionStatus {
    /// The session accepts moves; no verdict has been requested yet.
    #[default]
    InProgress,
    /// The last check found the board complete and correct.
    Solved,
    /// The last check found an empty or incorrect cell.
    Failed,
}

/// A digit revealed by [`PuzzleEngine::hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The cell the digit was placed in.
    pub position: Position,
    /// The solution digit for that cell.
    pub digit: Digit,
}

/// A single puzzle session.
///
/// The engine owns a carved [`Puzzle`], the live board derived from it, and
/// the undo/redo history of the player's moves. It validates every edit,
/// serves hints from the puzzle's own solution, and judges completion against
/// that solution on an explicit [`check`](Self::check).
///
/// # Examples
///
/// ```
/// use ninefold_game::{PuzzleEngine, SessionStatus};
/// use ninefold_generator::Difficulty;
///
/// let engine = PuzzleEngine::new_game(Difficulty::Medium);
///
/// assert_eq!(engine.status(), SessionStatus::InProgress);
/// assert_eq!(engine.puzzle().given_count(), 35);
/// assert!(!engine.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    puzzle: Puzzle,
    board: Board,
    history: MoveHistory,
    status: SessionStatus,
    options: EngineOptions,
}

impl PuzzleEngine {
    /// Creates a session over `puzzle` with default options.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_options(puzzle, EngineOptions::default())
    }

    /// Creates a session over `puzzle` with the given options.
    #[must_use]
    pub fn with_options(puzzle: Puzzle, options: EngineOptions) -> Self {
        let board = Board::new(&puzzle);
        Self {
            puzzle,
            board,
            history: MoveHistory::default(),
            status: SessionStatus::InProgress,
            options,
        }
    }

    /// Starts a session on a freshly shuffled solution, carved at
    /// `difficulty` with the thread-local RNG.
    #[must_use]
    pub fn new_game(difficulty: Difficulty) -> Self {
        Self::new_game_with_rng(difficulty, &mut rand::rng())
    }

    /// Starts a session on a freshly shuffled solution, drawing all
    /// randomness from `rng`.
    #[must_use]
    pub fn new_game_with_rng<R>(difficulty: Difficulty, rng: &mut R) -> Self
    where
        R: RngExt,
    {
        let solution = SolvedGrid::base().shuffled_with_rng(rng);
        let puzzle = PuzzleGenerator::new(solution).generate_with_rng(difficulty, rng);
        Self::new(puzzle)
    }

    /// Writes `value` into the cell at `position`, or clears it with `None`.
    ///
    /// Returns the applied value, with a raw digit normalized to a
    /// [`Digit`]. An edit that leaves the cell unchanged is a no-op: it
    /// records nothing and keeps any pending redo entries alive. Every
    /// effective edit is recorded for undo and moves a checked session back
    /// in progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] when the cell at `position` is
    /// a given, and [`GameError::InvalidValue`] when `value` is outside
    /// `1..=9`. Rejected edits leave the board and history untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, Position, SolvedGrid};
    /// use ninefold_game::PuzzleEngine;
    /// use ninefold_generator::Puzzle;
    ///
    /// let blank = Position::new(0, 2);
    /// let givens = Position::ALL.into_iter().filter(|pos| *pos != blank);
    /// let mut engine = PuzzleEngine::new(Puzzle::new(SolvedGrid::base(), givens));
    ///
    /// assert_eq!(engine.edit(blank, Some(4))?, Some(Digit::D4));
    /// assert_eq!(engine.cell(blank).value(), Some(Digit::D4));
    /// assert!(engine.edit(Position::new(0, 0), Some(1)).is_err());
    /// # Ok::<(), ninefold_game::GameError>(())
    /// ```
    pub fn edit(&mut self, position: Position, value: Option<u8>) -> Result<CellValue, GameError> {
        if self.board.cell(position).is_given() {
            return Err(GameError::InvalidPosition { position });
        }
        let applied = match value {
            Some(raw) => {
                Some(Digit::try_from_value(raw).ok_or(GameError::InvalidValue { value: raw })?)
            }
            None => None,
        };
        let previous = self.board.cell(position).value();
        if previous == applied {
            return Ok(applied);
        }

        self.board.set(position, applied);
        self.history.record(Move {
            position,
            previous,
            applied,
            kind: MoveKind::Input,
        });
        self.status = SessionStatus::InProgress;
        Ok(applied)
    }

    /// Reveals the solution digit of one empty cell, chosen uniformly with
    /// the thread-local RNG.
    ///
    /// How the digit lands depends on the configured [`HintPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoHintsAvailable`] when no cell is empty, even
    /// if some filled cells are wrong.
    pub fn hint(&mut self) -> Result<Hint, GameError> {
        self.hint_with_rng(&mut rand::rng())
    }

    /// Reveals the solution digit of one empty cell, drawing the choice from
    /// `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoHintsAvailable`] when no cell is empty.
    pub fn hint_with_rng<R>(&mut self, rng: &mut R) -> Result<Hint, GameError>
    where
        R: RngExt,
    {
        let empties: Vec<_> = Position::ALL
            .into_iter()
            .filter(|pos| self.board.cell(*pos).is_empty())
            .collect();
        if empties.is_empty() {
            return Err(GameError::NoHintsAvailable);
        }

        let position = empties[rng.random_range(0..empties.len())];
        let digit = self.puzzle.solution()[position];
        match self.options.hint_policy {
            HintPolicy::Editable => {
                self.board.set(position, Some(digit));
                self.history.record(Move {
                    position,
                    previous: None,
                    applied: Some(digit),
                    kind: MoveKind::Hint,
                });
            }
            HintPolicy::Fixed => {
                self.board.promote_to_given(position, digit);
                self.history.purge_position(position);
                self.history.clear_redo();
            }
        }
        self.status = SessionStatus::InProgress;
        Ok(Hint { position, digit })
    }

    /// Takes back the most recent recorded move.
    ///
    /// Returns `false` when there is nothing to undo. A successful undo
    /// moves a checked session back in progress.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.board).is_some();
        if undone {
            self.status = SessionStatus::InProgress;
        }
        undone
    }

    /// Reapplies the most recently undone move.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.board).is_some();
        if redone {
            self.status = SessionStatus::InProgress;
        }
        redone
    }

    /// Whether [`undo`](Self::undo) would take back a move.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would reapply a move.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Abandons the current board and carves a fresh puzzle at `difficulty`
    /// from the same solution, using the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_game::PuzzleEngine;
    /// use ninefold_generator::Difficulty;
    ///
    /// let mut engine = PuzzleEngine::new_game(Difficulty::Easy);
    /// let solution = engine.solution().clone();
    ///
    /// engine.reset(Difficulty::Hard);
    ///
    /// assert_eq!(*engine.solution(), solution);
    /// assert_eq!(engine.puzzle().given_count(), 27);
    /// assert!(!engine.can_undo());
    /// ```
    pub fn reset(&mut self, difficulty: Difficulty) {
        self.reset_with_rng(difficulty, &mut rand::rng());
    }

    /// Abandons the current board and carves a fresh puzzle at `difficulty`
    /// from the same solution, drawing cell choices from `rng`.
    ///
    /// The history is cleared and the session is back in progress; the
    /// configured options carry over.
    pub fn reset_with_rng<R>(&mut self, difficulty: Difficulty, rng: &mut R)
    where
        R: RngExt,
    {
        let generator = PuzzleGenerator::new(self.puzzle.solution().clone());
        *self = Self::with_options(generator.generate_with_rng(difficulty, rng), self.options);
    }

    /// Whether every cell holds its solution digit.
    ///
    /// Read-only: unlike [`check`](Self::check), this never changes the
    /// session status.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.mismatches().next().is_none()
    }

    /// Iterates over the cells that do not hold their solution digit, in
    /// row-major order. Empty cells count as mismatches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Position, SolvedGrid};
    /// use ninefold_game::PuzzleEngine;
    /// use ninefold_generator::Puzzle;
    ///
    /// let blank = Position::new(0, 2);
    /// let givens = Position::ALL.into_iter().filter(|pos| *pos != blank);
    /// let mut engine = PuzzleEngine::new(Puzzle::new(SolvedGrid::base(), givens));
    ///
    /// assert_eq!(engine.mismatches().collect::<Vec<_>>(), [blank]);
    /// engine.edit(blank, Some(4))?;
    /// assert_eq!(engine.mismatches().count(), 0);
    /// # Ok::<(), ninefold_game::GameError>(())
    /// ```
    pub fn mismatches(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.board.cell(*pos).value() != Some(self.puzzle.solution()[*pos]))
    }

    /// Judges the board and records the verdict in the session status.
    ///
    /// Returns `true` and moves the session to [`SessionStatus::Solved`]
    /// when every cell holds its solution digit; otherwise returns `false`
    /// and moves it to [`SessionStatus::Failed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Position, SolvedGrid};
    /// use ninefold_game::PuzzleEngine;
    /// use ninefold_generator::Puzzle;
    ///
    /// let blank = Position::new(0, 2);
    /// let givens = Position::ALL.into_iter().filter(|pos| *pos != blank);
    /// let mut engine = PuzzleEngine::new(Puzzle::new(SolvedGrid::base(), givens));
    ///
    /// assert!(!engine.check());
    /// assert!(engine.status().is_failed());
    ///
    /// engine.edit(blank, Some(4))?;
    /// assert!(engine.check());
    /// assert!(engine.status().is_solved());
    /// # Ok::<(), ninefold_game::GameError>(())
    /// ```
    pub fn check(&mut self) -> bool {
        let solved = self.is_solved();
        self.status = if solved {
            SessionStatus::Solved
        } else {
            SessionStatus::Failed
        };
        solved
    }

    /// The verdict of the most recent check, if any.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The state of the cell at `position`.
    #[must_use]
    pub fn cell(&self, position: Position) -> CellState {
        self.board.cell(position)
    }

    /// Iterates over all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Position::ALL
            .into_iter()
            .map(move |pos| (pos, self.board.cell(pos)))
    }

    /// The solved grid this session is judged against.
    #[must_use]
    pub fn solution(&self) -> &SolvedGrid {
        self.puzzle.solution()
    }

    /// The carved puzzle this session started from.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The options this session was created with.
    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn seeded_engine(difficulty: Difficulty, seed: u64) -> PuzzleEngine {
        PuzzleEngine::new_game_with_rng(difficulty, &mut Pcg64Mcg::seed_from_u64(seed))
    }

    fn puzzle_with_blanks(blanks: &[Position]) -> Puzzle {
        Puzzle::new(
            SolvedGrid::base(),
            Position::ALL.into_iter().filter(|pos| !blanks.contains(pos)),
        )
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let engine = seeded_engine(Difficulty::Medium, 1);
        assert_eq!(engine.status(), SessionStatus::InProgress);
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
        assert!(!engine.is_solved());
        assert_eq!(engine.puzzle().given_count(), 35);

        let givens = engine.cells().filter(|(_, state)| state.is_given()).count();
        assert_eq!(givens, 35);
    }

    #[test]
    fn test_same_seed_reproduces_the_game() {
        let first = seeded_engine(Difficulty::Hard, 42);
        let second = seeded_engine(Difficulty::Hard, 42);
        assert_eq!(first.puzzle(), second.puzzle());
    }

    #[test]
    fn test_edit_fills_records_and_normalizes() {
        let a = Position::new(0, 2);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));

        assert_eq!(engine.edit(a, Some(9)), Ok(Some(Digit::D9)));
        assert_eq!(engine.cell(a), CellState::Filled(Digit::D9));
        assert!(engine.can_undo());

        assert_eq!(engine.edit(a, Some(4)), Ok(Some(Digit::D4)));
        assert_eq!(engine.edit(a, None), Ok(None));
        assert!(engine.cell(a).is_empty());
    }

    #[test]
    fn test_edit_rejects_given_cells() {
        let a = Position::new(0, 2);
        let given = Position::new(0, 0);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));

        assert_eq!(
            engine.edit(given, Some(5)),
            Err(GameError::InvalidPosition { position: given })
        );
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_edit_rejects_out_of_range_values() {
        let a = Position::new(0, 2);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));

        assert_eq!(
            engine.edit(a, Some(0)),
            Err(GameError::InvalidValue { value: 0 })
        );
        assert_eq!(
            engine.edit(a, Some(10)),
            Err(GameError::InvalidValue { value: 10 })
        );
        assert!(engine.cell(a).is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_noop_edit_keeps_history_intact() {
        let a = Position::new(0, 2);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));

        engine.edit(a, Some(1)).unwrap();
        assert!(engine.undo());
        assert!(engine.can_redo());

        // Clearing an already-empty cell changes nothing
        assert_eq!(engine.edit(a, None), Ok(None));
        assert!(engine.can_redo());
        assert!(engine.redo());
        assert_eq!(engine.cell(a), CellState::Filled(Digit::D1));
    }

    #[test]
    fn test_undo_and_redo_walk_the_history() {
        let a = Position::new(0, 2);
        let b = Position::new(1, 3);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a, b]));

        engine.edit(a, Some(4)).unwrap();
        engine.edit(b, Some(1)).unwrap();

        assert!(engine.undo());
        assert!(engine.cell(b).is_empty());
        assert!(engine.undo());
        assert!(engine.cell(a).is_empty());
        assert!(!engine.undo());

        assert!(engine.redo());
        assert_eq!(engine.cell(a), CellState::Filled(Digit::D4));
        assert!(engine.redo());
        assert_eq!(engine.cell(b), CellState::Filled(Digit::D1));
        assert!(!engine.redo());
    }

    #[test]
    fn test_check_drives_the_status_machine() {
        let a = Position::new(0, 2);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));

        engine.edit(a, Some(9)).unwrap();
        assert!(!engine.check());
        assert!(engine.status().is_failed());

        assert!(engine.undo());
        assert!(engine.status().is_in_progress());

        engine.edit(a, Some(4)).unwrap();
        assert!(engine.is_solved());
        assert!(engine.status().is_in_progress());

        assert!(engine.check());
        assert!(engine.status().is_solved());

        engine.edit(a, None).unwrap();
        assert!(engine.status().is_in_progress());
    }

    #[test]
    fn test_hint_fills_a_cell_from_the_solution() {
        let a = Position::new(0, 2);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        let hint = engine.hint_with_rng(&mut rng).unwrap();
        assert_eq!(hint.position, a);
        assert_eq!(hint.digit, Digit::D4);
        assert_eq!(engine.cell(a), CellState::Filled(Digit::D4));

        assert!(engine.undo());
        assert!(engine.cell(a).is_empty());
    }

    #[test]
    fn test_hints_fill_every_blank_exactly_once() {
        let mut engine = seeded_engine(Difficulty::Medium, 7);
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let blanks = engine.puzzle().blank_count();
        assert_eq!(blanks, 46);

        let mut hinted = Vec::new();
        for _ in 0..blanks {
            let hint = engine.hint_with_rng(&mut rng).unwrap();
            assert_eq!(hint.digit, engine.solution()[hint.position]);
            hinted.push(hint.position);
        }
        hinted.sort_unstable();
        hinted.dedup();
        assert_eq!(hinted.len(), blanks);

        assert_eq!(
            engine.hint_with_rng(&mut rng),
            Err(GameError::NoHintsAvailable)
        );
        assert!(engine.is_solved());
    }

    #[test]
    fn test_hint_needs_an_empty_cell() {
        let a = Position::new(0, 2);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a]));

        engine.edit(a, Some(9)).unwrap();
        assert_eq!(engine.hint(), Err(GameError::NoHintsAvailable));
        assert!(!engine.is_solved());
    }

    #[test]
    fn test_fixed_hint_promotes_the_cell_to_given() {
        let a = Position::new(0, 2);
        let options = EngineOptions::default().hint_policy(HintPolicy::Fixed);
        let mut engine = PuzzleEngine::with_options(puzzle_with_blanks(&[a]), options);
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        let hint = engine.hint_with_rng(&mut rng).unwrap();
        assert_eq!(hint.position, a);
        assert_eq!(engine.cell(a), CellState::Given(Digit::D4));
        assert!(!engine.can_undo());
        assert_eq!(
            engine.edit(a, Some(1)),
            Err(GameError::InvalidPosition { position: a })
        );
    }

    #[test]
    fn test_fixed_hint_purges_the_cell_from_history() {
        let a = Position::new(0, 2);
        let b = Position::new(1, 3);
        let options = EngineOptions::default().hint_policy(HintPolicy::Fixed);
        let mut engine = PuzzleEngine::with_options(puzzle_with_blanks(&[a, b]), options);
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        engine.edit(a, Some(9)).unwrap();
        engine.edit(b, Some(7)).unwrap();
        engine.edit(a, None).unwrap();

        // Only `a` is empty, so the hint must land there
        let hint = engine.hint_with_rng(&mut rng).unwrap();
        assert_eq!(hint.position, a);
        assert!(engine.cell(a).is_given());

        // Both edits of `a` are gone; only the edit of `b` can be undone
        assert!(engine.undo());
        assert!(engine.cell(b).is_empty());
        assert_eq!(engine.cell(a), CellState::Given(Digit::D4));
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_fixed_hint_clears_redo() {
        let a = Position::new(0, 2);
        let b = Position::new(1, 3);
        let options = EngineOptions::default().hint_policy(HintPolicy::Fixed);
        let mut engine = PuzzleEngine::with_options(puzzle_with_blanks(&[a, b]), options);
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        engine.edit(a, Some(9)).unwrap();
        engine.edit(a, Some(4)).unwrap();
        assert!(engine.undo());
        assert!(engine.can_redo());

        // Only `b` is empty; its promotion clears the pending redo of `a`
        let hint = engine.hint_with_rng(&mut rng).unwrap();
        assert_eq!(hint.position, b);
        assert!(!engine.can_redo());
        assert!(engine.can_undo());
    }

    #[test]
    fn test_reset_recarves_the_same_solution() {
        let mut engine = seeded_engine(Difficulty::Medium, 21);
        let solution = engine.solution().clone();
        let a = engine
            .cells()
            .find_map(|(pos, state)| state.is_empty().then_some(pos))
            .unwrap();
        engine.edit(a, Some(1)).unwrap();
        engine.check();

        engine.reset_with_rng(Difficulty::Hard, &mut Pcg64Mcg::seed_from_u64(22));

        assert_eq!(*engine.solution(), solution);
        assert_eq!(engine.puzzle().given_count(), 27);
        assert_eq!(engine.status(), SessionStatus::InProgress);
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
        for (pos, state) in engine.cells() {
            if engine.puzzle().is_given(pos) {
                assert_eq!(state, CellState::Given(solution[pos]));
            } else {
                assert!(state.is_empty());
            }
        }
    }

    #[test]
    fn test_mismatches_report_wrong_and_missing_digits() {
        let a = Position::new(0, 2);
        let b = Position::new(1, 3);
        let mut engine = PuzzleEngine::new(puzzle_with_blanks(&[a, b]));

        assert_eq!(engine.mismatches().collect::<Vec<_>>(), [a, b]);

        engine.edit(a, Some(9)).unwrap();
        assert_eq!(engine.mismatches().collect::<Vec<_>>(), [a, b]);

        engine.edit(a, Some(4)).unwrap();
        assert_eq!(engine.mismatches().collect::<Vec<_>>(), [b]);

        engine.edit(b, Some(1)).unwrap();
        assert_eq!(engine.mismatches().count(), 0);
        assert!(engine.is_solved());
    }

    #[test]
    fn test_cells_iterates_in_row_major_order() {
        let engine = PuzzleEngine::new(puzzle_with_blanks(&[]));
        let cells: Vec<_> = engine.cells().collect();
        assert_eq!(cells.len(), 81);
        assert_eq!(cells[0], (Position::new(0, 0), CellState::Given(Digit::D5)));
        assert_eq!(cells[1], (Position::new(0, 1), CellState::Given(Digit::D3)));
        assert!(engine.is_solved());
    }

    proptest! {
        #[test]
        fn undo_rewinds_every_recorded_move(
            ops in prop::collection::vec((0u8..81, prop::option::of(1u8..=9)), 1..40),
        ) {
            let mut engine = PuzzleEngine::new(puzzle_with_blanks(&Position::ALL));
            let mut changes = 0;
            for (index, value) in ops {
                let pos = Position::from_index(usize::from(index));
                let before = engine.cell(pos).value();
                engine.edit(pos, value).unwrap();
                if before != value.map(Digit::from_value) {
                    changes += 1;
                }
            }
            let full: Vec<_> = engine.cells().collect();

            for _ in 0..changes {
                prop_assert!(engine.undo());
            }
            prop_assert!(!engine.undo());
            prop_assert!(engine.cells().all(|(_, state)| state.is_empty()));

            for _ in 0..changes {
                prop_assert!(engine.redo());
            }
            prop_assert!(!engine.redo());
            prop_assert_eq!(engine.cells().collect::<Vec<_>>(), full);
        }

        #[test]
        fn givens_survive_any_operation_sequence(
            seed in any::<u64>(),
            ops in prop::collection::vec((0u8..4, 0u8..81, 0u8..=9), 1..60),
        ) {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let mut engine = PuzzleEngine::new_game_with_rng(Difficulty::Easy, &mut rng);
            let givens: Vec<_> = engine.puzzle().given_positions().collect();

            for (kind, index, value) in ops {
                let pos = Position::from_index(usize::from(index));
                match kind {
                    0 => {
                        let _ = engine.edit(pos, (value > 0).then_some(value));
                    }
                    1 => {
                        let _ = engine.hint_with_rng(&mut rng);
                    }
                    2 => {
                        engine.undo();
                    }
                    _ => {
                        engine.redo();
                    }
                }
            }

            for pos in givens {
                prop_assert_eq!(engine.cell(pos), CellState::Given(engine.solution()[pos]));
            }
        }
    }
}
