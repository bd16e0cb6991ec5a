use super::bishop::is_diagonal;
use super::rook::is_straight;
use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn queen_move_ok(&self, queen: &Piece, to: Square) -> bool {
        (is_straight(queen.square, to) || is_diagonal(queen.square, to))
            && self.path_clear(queen.square, to)
    }
}
