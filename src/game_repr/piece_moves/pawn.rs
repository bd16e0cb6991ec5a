use super::super::{Board, Piece, Square};

impl Board {
    /// Single push onto an empty square, double push from the unmoved state
    /// onto an empty square, or a one-step diagonal capture.
    ///
    /// The double push only looks at the destination; the square passed
    /// over is not required to be empty.
    pub(crate) fn pawn_move_ok(&self, pawn: &Piece, to: Square) -> bool {
        let direction = pawn.color.pawn_direction();
        let (row_diff, col_diff) = pawn.square.delta(to);
        let target = self.piece_at(to);

        match col_diff.abs() {
            0 => {
                if target.is_some() {
                    return false;
                }
                row_diff == direction || (!pawn.has_moved && row_diff == 2 * direction)
            }
            1 if row_diff == direction => target.is_some_and(|t| t.color != pawn.color),
            _ => false,
        }
    }
}
