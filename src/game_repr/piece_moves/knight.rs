use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn knight_move_ok(&self, knight: &Piece, to: Square) -> bool {
        let (dr, dc) = knight.square.delta(to);
        matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
    }
}
