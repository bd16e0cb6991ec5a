use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn bishop_move_ok(&self, bishop: &Piece, to: Square) -> bool {
        is_diagonal(bishop.square, to) && self.path_clear(bishop.square, to)
    }
}

pub(crate) fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    dr != 0 && dr.abs() == dc.abs()
}
