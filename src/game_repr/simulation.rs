//! In-place make/unmake used by the legality filter, perft and the search.
//!
//! A simulated move rewrites the grid, the moving piece's square and
//! has-moved flag and the king index, exactly like a committed move, but
//! leaves the side to move and the game-over state alone. [`Board::undo`]
//! restores every one of those fields from the snapshot in [`UndoInfo`].

use std::ops::{Deref, DerefMut};

use super::{Board, Move, Piece, Type};

/// Snapshot taken by [`Board::apply`].
#[derive(Debug, Clone, Copy)]
#[must_use = "a simulated move has to be undone"]
pub struct UndoInfo {
    mv: Move,
    /// The moving piece as it was before the move; `None` if the source was empty.
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl UndoInfo {
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

impl Board {
    /// Makes `mv` on the grid without any legality checks. An empty source
    /// square makes this a no-op.
    pub fn apply(&mut self, mv: Move) -> UndoInfo {
        let moved = self.take_slot(mv.from());
        let captured = match moved {
            Some(_) => self.take_slot(mv.to()),
            None => None,
        };

        if let Some(mut piece) = moved {
            piece.square = mv.to();
            piece.has_moved = true;
            if piece.piece_type == Type::King {
                self.set_king_square(piece.color, mv.to());
            }
            self.set_slot(mv.to(), Some(piece));
        }

        UndoInfo { mv, moved, captured }
    }

    /// Reverts an [`apply`](Board::apply). Undos must be replayed in
    /// reverse order of their applies.
    pub fn undo(&mut self, undo: UndoInfo) {
        let Some(piece) = undo.moved else {
            return;
        };

        self.set_slot(undo.mv.from(), Some(piece));
        self.set_slot(undo.mv.to(), undo.captured);
        if piece.piece_type == Type::King {
            self.set_king_square(piece.color, undo.mv.from());
        }
    }

    /// Scoped [`apply`](Board::apply): the move is taken back when the
    /// returned guard is dropped, whichever way the caller leaves its scope.
    pub fn simulate(&mut self, mv: Move) -> Simulation<'_> {
        let undo = self.apply(mv);
        Simulation {
            board: self,
            undo: Some(undo),
        }
    }
}

/// Board with one extra move on it. Derefs to the board.
pub struct Simulation<'a> {
    board: &'a mut Board,
    undo: Option<UndoInfo>,
}

impl Simulation<'_> {
    pub fn captured(&self) -> Option<Piece> {
        self.undo.and_then(|u| u.captured)
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Simulation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.undo(undo);
        }
    }
}
