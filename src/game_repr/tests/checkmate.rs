use crate::game_repr::{Board, Color, GameResult, Move, MoveError, Type};
use super::sq;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    board.make_move(6, 5, 5, 5).unwrap();
    board.make_move(1, 4, 3, 4).unwrap();
    board.make_move(6, 6, 4, 6).unwrap();
    assert!(!board.is_game_over());
    board.make_move(0, 3, 4, 7).unwrap();

    assert!(board.is_game_over());
    assert_eq!(board.result(), Some(GameResult::BlackWins));
    assert!(board.is_checkmate(Color::White));
    assert!(board.legal_moves(Color::White).is_empty());
}

fn back_rank() -> Board {
    Board::builder()
        .piece(Color::Black, Type::King, sq(0, 6))
        .piece(Color::Black, Type::Pawn, sq(1, 5))
        .piece(Color::Black, Type::Pawn, sq(1, 6))
        .piece(Color::Black, Type::Pawn, sq(1, 7))
        .piece(Color::White, Type::Rook, sq(7, 0))
        .piece(Color::White, Type::King, sq(7, 6))
        .build()
        .unwrap()
}

#[test]
fn test_back_rank_mate() {
    let mut board = back_rank();
    assert!(!board.is_game_over());

    board.make_move(7, 0, 0, 0).unwrap();
    assert_eq!(board.result(), Some(GameResult::WhiteWins));
    assert_eq!(board.result().and_then(|r| r.winner()), Some(Color::White));
}

#[test]
fn test_builder_detects_existing_mate() {
    let board = Board::builder()
        .piece(Color::Black, Type::King, sq(0, 6))
        .piece(Color::Black, Type::Pawn, sq(1, 5))
        .piece(Color::Black, Type::Pawn, sq(1, 6))
        .piece(Color::Black, Type::Pawn, sq(1, 7))
        .piece(Color::White, Type::Rook, sq(0, 0))
        .piece(Color::White, Type::King, sq(7, 6))
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert_eq!(board.result(), Some(GameResult::WhiteWins));
}

#[test]
fn test_check_with_escape_square_is_not_mate() {
    let mut board = Board::builder()
        .piece(Color::Black, Type::King, sq(0, 6))
        .piece(Color::Black, Type::Pawn, sq(1, 5))
        .piece(Color::Black, Type::Pawn, sq(1, 6))
        .moved_piece(Color::Black, Type::Pawn, sq(2, 7))
        .piece(Color::White, Type::Rook, sq(7, 0))
        .piece(Color::White, Type::King, sq(7, 6))
        .build()
        .unwrap();

    board.make_move(7, 0, 0, 0).unwrap();
    assert!(board.is_king_in_check(Color::Black));
    assert!(!board.is_game_over());
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(board.legal_moves(Color::Black).as_slice(), &[Move::new(sq(0, 6), sq(1, 7))]);
}

#[test]
fn test_no_moves_accepted_after_mate() {
    let mut board = back_rank();
    board.make_move(7, 0, 0, 0).unwrap();

    assert!(board.legal_moves(Color::Black).is_empty());
    assert_eq!(board.make_move(1, 5, 2, 5), Err(MoveError::LeavesKingInCheck));
}
