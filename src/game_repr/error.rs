//! Error types for board operations.
//!
//! Every rejected move is a [`MoveError`]; the variant says which
//! precondition failed. Preconditions are checked in declaration order and
//! the board is left untouched whenever one fails.

use super::{Color, Square};

/// Reasons a move can be rejected by [`Board::make_move`](super::Board::make_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid board position")]
    OutOfBounds,

    #[error("No piece at source position {0}")]
    EmptySquare(Square),

    #[error("Not your piece: {0} is to move")]
    NotYourPiece(Color),

    #[error("Invalid move for this piece")]
    IllegalGeometry,

    #[error("Move would put king in check")]
    LeavesKingInCheck,
}

/// Problems with a hand-built position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} has no king")]
    MissingKing(Color),

    #[error("{0} has more than one king")]
    DuplicateKing(Color),

    #[error("Square {0} is already occupied")]
    SquareOccupied(Square),

    /// The side that just "moved" left its opponent's king attacked; the
    /// side to move could take it.
    #[error("{0} is in check but not to move")]
    OpponentInCheck(Color),
}
