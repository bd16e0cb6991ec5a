use super::*;

// ==================== HELPER FUNCTIONS ====================

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

/// White king on (7,0), black king on (0,7); out of the way of the center.
pub fn corner_kings() -> BoardBuilder {
    Board::builder()
        .piece(Color::White, Type::King, sq(7, 0))
        .piece(Color::Black, Type::King, sq(0, 7))
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: Square, to: Square) -> bool {
    moves.iter().any(|m| m.from() == from && m.to() == to)
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod checkmate;
