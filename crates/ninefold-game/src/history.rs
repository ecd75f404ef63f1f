//! Undo/redo bookkeeping for board edits.

use ninefold_core::{CellValue, Position};

use crate::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveKind {
    Input,
    Hint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Move {
    pub(crate) position: Position,
    pub(crate) previous: CellValue,
    pub(crate) applied: CellValue,
    pub(crate) kind: MoveKind,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MoveHistory {
    undo_stack: Vec<Move>,
    redo_stack: Vec<Move>,
}

impl MoveHistory {
    /// Records a committed move. Committing invalidates the redo stack.
    pub(crate) fn record(&mut self, mv: Move) {
        self.undo_stack.push(mv);
        self.redo_stack.clear();
    }

    pub(crate) fn undo(&mut self, board: &mut Board) -> Option<Move> {
        let mv = self.undo_stack.pop()?;
        board.set(mv.position, mv.previous);
        self.redo_stack.push(mv);
        Some(mv)
    }

    pub(crate) fn redo(&mut self, board: &mut Board) -> Option<Move> {
        let mv = self.redo_stack.pop()?;
        board.set(mv.position, mv.applied);
        self.undo_stack.push(mv);
        Some(mv)
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops every recorded move touching `pos` from both stacks.
    pub(crate) fn purge_position(&mut self, pos: Position) {
        self.undo_stack.retain(|mv| mv.position != pos);
        self.redo_stack.retain(|mv| mv.position != pos);
    }

    pub(crate) fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }
}
