use super::super::{Board, Piece, Square};

impl Board {
    /// One step in any direction. No castling.
    pub(crate) fn king_move_ok(&self, king: &Piece, to: Square) -> bool {
        let (dr, dc) = king.square.delta(to);
        dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
    }
}
