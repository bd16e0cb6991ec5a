use crate::game_repr::{Board, Color, MoveError, Type};
use super::{corner_kings, has_move, sq};

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_step_from_start() {
    let mut board = corner_kings().piece(Color::White, Type::Pawn, sq(6, 4)).build().unwrap();

    let moves = board.legal_moves_from(sq(6, 4));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, sq(6, 4), sq(5, 4)));
    assert!(has_move(&moves, sq(6, 4), sq(4, 4)));
}

#[test]
fn test_pawn_loses_double_step_after_moving() {
    let mut board = corner_kings()
        .moved_piece(Color::White, Type::Pawn, sq(5, 4))
        .build()
        .unwrap();

    let moves = board.legal_moves_from(sq(5, 4));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, sq(5, 4), sq(4, 4)));
}

#[test]
fn test_pawn_moved_flag_is_set_by_a_move() {
    let mut board = Board::new();
    board.make_move(6, 0, 5, 0).unwrap();
    board.make_move(1, 0, 2, 0).unwrap();

    assert!(board.piece_at(sq(5, 0)).unwrap().has_moved);
    assert_eq!(board.make_move(5, 0, 3, 0), Err(MoveError::IllegalGeometry));
}

#[test]
fn test_black_pawn_moves_down() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap();

    let moves = board.legal_moves_from(sq(1, 3));
    assert!(has_move(&moves, sq(1, 3), sq(2, 3)));
    assert!(has_move(&moves, sq(1, 3), sq(3, 3)));
    assert_eq!(board.make_move(1, 3, 0, 3), Err(MoveError::IllegalGeometry));
}

#[test]
fn test_pawn_cannot_move_backwards_or_sideways() {
    let mut board = corner_kings()
        .moved_piece(Color::White, Type::Pawn, sq(4, 4))
        .build()
        .unwrap();

    assert_eq!(board.make_move(4, 4, 5, 4), Err(MoveError::IllegalGeometry));
    assert_eq!(board.make_move(4, 4, 4, 5), Err(MoveError::IllegalGeometry));
}

#[test]
fn test_pawn_blocked_one_step_can_still_jump() {
    // The double step only requires the landing square to be empty
    let mut board = corner_kings()
        .piece(Color::White, Type::Pawn, sq(6, 4))
        .piece(Color::Black, Type::Knight, sq(5, 4))
        .build()
        .unwrap();

    let moves = board.legal_moves_from(sq(6, 4));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, sq(6, 4), sq(4, 4)));
}

#[test]
fn test_black_pawn_jumps_over_piece() {
    let mut board = corner_kings()
        .piece(Color::Black, Type::Pawn, sq(1, 2))
        .piece(Color::White, Type::Knight, sq(2, 2))
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    let moves = board.legal_moves_from(sq(1, 2));
    assert_eq!(moves.as_slice(), &[crate::game_repr::Move::new(sq(1, 2), sq(3, 2))]);
}

#[test]
fn test_pawn_double_step_needs_empty_landing() {
    let mut board = corner_kings()
        .piece(Color::White, Type::Pawn, sq(6, 4))
        .piece(Color::Black, Type::Knight, sq(4, 4))
        .build()
        .unwrap();

    let moves = board.legal_moves_from(sq(6, 4));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, sq(6, 4), sq(5, 4)));
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    let mut board = corner_kings()
        .moved_piece(Color::White, Type::Pawn, sq(5, 4))
        .piece(Color::Black, Type::Knight, sq(4, 3))
        .piece(Color::White, Type::Knight, sq(4, 5))
        .build()
        .unwrap();

    let moves = board.legal_moves_from(sq(5, 4));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, sq(5, 4), sq(4, 3)));
    assert!(has_move(&moves, sq(5, 4), sq(4, 4)));
    assert!(!has_move(&moves, sq(5, 4), sq(4, 5)));
}

#[test]
fn test_pawn_cannot_capture_straight_ahead() {
    let mut board = corner_kings()
        .moved_piece(Color::White, Type::Pawn, sq(5, 4))
        .piece(Color::Black, Type::Knight, sq(4, 4))
        .build()
        .unwrap();

    assert!(board.legal_moves_from(sq(5, 4)).is_empty());
}

#[test]
fn test_pawn_on_last_rank_stays_a_pawn() {
    let mut board = corner_kings()
        .moved_piece(Color::White, Type::Pawn, sq(1, 3))
        .build()
        .unwrap();

    board.make_move(1, 3, 0, 3).unwrap();
    let piece = board.piece_at(sq(0, 3)).unwrap();
    assert_eq!(piece.piece_type, Type::Pawn);
    assert_eq!(piece.color, Color::White);
}
