use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn rook_move_ok(&self, rook: &Piece, to: Square) -> bool {
        is_straight(rook.square, to) && self.path_clear(rook.square, to)
    }
}

/// Same rank xor same file.
pub(crate) fn is_straight(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta(to);
    (dr == 0) != (dc == 0)
}
