//! Destination-geometry rules for each piece variant.
//!
//! These are pseudo-legal checks: they read the board but never mutate it,
//! and they know nothing about whether the mover's own king ends up in
//! check. That filter lives on the board.

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::{Board, Piece, Square, Type};

impl Piece {
    /// Whether this piece's movement rule accepts `to` on `board`.
    pub fn is_legal_destination(&self, to: Square, board: &Board) -> bool {
        if to == self.square {
            return false;
        }
        if !board.can_land_on(self, to) {
            return false;
        }

        match self.piece_type {
            Type::Pawn => board.pawn_move_ok(self, to),
            Type::Knight => board.knight_move_ok(self, to),
            Type::Bishop => board.bishop_move_ok(self, to),
            Type::Rook => board.rook_move_ok(self, to),
            Type::Queen => board.queen_move_ok(self, to),
            Type::King => board.king_move_ok(self, to),
        }
    }
}

impl Board {
    /// Empty, or held by the other side.
    pub(crate) fn can_land_on(&self, piece: &Piece, to: Square) -> bool {
        match self.piece_at(to) {
            Some(target) => target.color != piece.color,
            None => true,
        }
    }

    /// Walks unit steps from `from` toward `to`, both endpoints excluded.
    /// Callers guarantee the two squares share a rank, file or diagonal.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta(to);
        let (step_r, step_c) = (dr.signum(), dc.signum());

        let mut row = from.row() as i32 + step_r;
        let mut col = from.col() as i32 + step_c;
        while (row, col) != (to.row() as i32, to.col() as i32) {
            match Square::try_new(row, col) {
                Some(sq) if self.piece_at(sq).is_none() => {}
                _ => return false,
            }
            row += step_r;
            col += step_c;
        }
        true
    }
}
