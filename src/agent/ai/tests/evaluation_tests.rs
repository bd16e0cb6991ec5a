// Tests for the static evaluator

use crate::agent::ai::evaluation::{
    evaluate, king_safety, material_and_position, mobility, position_bonus, CHECK_PENALTY,
};
use crate::game_repr::{Board, Color, Piece, Square, Type};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_starting_position_balanced() {
    let mut board = Board::new();
    assert_eq!(evaluate(&mut board, Color::White), 0);
    assert_eq!(evaluate(&mut board, Color::Black), 0);
}

#[test]
fn test_centralized_knight() {
    // Material +3, inner center +15, mobility (13 - 4) * 2
    let mut board = Board::builder()
        .piece(Color::White, Type::King, sq(7, 4))
        .piece(Color::Black, Type::King, sq(0, 4))
        .piece(Color::White, Type::Knight, sq(3, 3))
        .build()
        .unwrap();

    assert_eq!(material_and_position(&board, Color::White), 18);
    assert_eq!(mobility(&mut board, Color::White), 18);
    assert_eq!(evaluate(&mut board, Color::White), 36);
}

#[test]
fn test_perspective_flip() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap();
    board.make_move(1, 3, 3, 3).unwrap();
    board.make_move(4, 4, 3, 3).unwrap();

    let white = evaluate(&mut board, Color::White);
    let black = evaluate(&mut board, Color::Black);
    assert_eq!(white, -black);
    assert!(white > 0, "White is a pawn up: {}", white);
}

#[test]
fn test_position_bonus_rings() {
    let at = |row, col| position_bonus(&Piece::new(Color::White, Type::Pawn, sq(row, col)));

    assert_eq!(at(0, 0), 0);
    assert_eq!(at(1, 4), 0);
    assert_eq!(at(2, 2), 5);
    assert_eq!(at(5, 3), 5);
    assert_eq!(at(3, 3), 15);
    assert_eq!(at(4, 4), 15);
}

#[test]
fn test_king_safety_signs() {
    let board = Board::builder()
        .piece(Color::White, Type::King, sq(7, 4))
        .piece(Color::Black, Type::Rook, sq(0, 4))
        .piece(Color::Black, Type::King, sq(0, 0))
        .build()
        .unwrap();

    assert_eq!(king_safety(&board, Color::White), -CHECK_PENALTY);
    assert_eq!(king_safety(&board, Color::Black), CHECK_PENALTY);
    assert_eq!(king_safety(&Board::new(), Color::White), 0);
}

#[test]
fn test_material_advantage() {
    let board = Board::builder()
        .piece(Color::White, Type::King, sq(7, 0))
        .piece(Color::Black, Type::King, sq(0, 7))
        .piece(Color::White, Type::Queen, sq(7, 6))
        .piece(Color::Black, Type::Rook, sq(0, 0))
        .build()
        .unwrap();

    assert_eq!(material_and_position(&board, Color::White), 4);
    assert_eq!(material_and_position(&board, Color::Black), -4);
}

#[test]
fn test_evaluate_leaves_board_untouched() {
    let mut board = Board::new();
    board.make_move(6, 4, 4, 4).unwrap();
    let before = board.clone();

    evaluate(&mut board, Color::Black);
    assert_eq!(board, before);
}
