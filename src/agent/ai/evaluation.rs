// Static position evaluation
// Score is always from the perspective of the side passed in (the engine's
// side): positive = good for that side.
//
// Terms, summed with no weighting:
// - Material: piece values, + for own pieces, - for the opponent's
// - Center: +5 for a piece on the central 4x4, another +10 on the inner 2x2
// - Mobility: (own legal moves - opponent legal moves) * 2
// - King safety: -50 if own king is in check, +50 if the opponent's is

use crate::game_repr::{Board, Color, Piece};

pub const CENTER_BONUS: i32 = 5;
pub const INNER_CENTER_BONUS: i32 = 10;
pub const MOBILITY_WEIGHT: i32 = 2;
pub const CHECK_PENALTY: i32 = 50;

/// Full evaluation of `board` for `side`.
///
/// Takes the board mutably because the mobility term enumerates legal
/// moves; the board is left exactly as it was.
pub fn evaluate(board: &mut Board, side: Color) -> i32 {
    material_and_position(board, side) + mobility(board, side) + king_safety(board, side)
}

fn signed(piece: &Piece, side: Color, value: i32) -> i32 {
    if piece.is(side) {
        value
    } else {
        -value
    }
}

/// Center bonus for a single piece, before the side sign is applied.
pub fn position_bonus(piece: &Piece) -> i32 {
    let mut bonus = 0;
    if piece.square.is_central() {
        bonus += CENTER_BONUS;
    }
    if piece.square.is_inner_center() {
        bonus += INNER_CENTER_BONUS;
    }
    bonus
}

pub fn material_and_position(board: &Board, side: Color) -> i32 {
    board
        .pieces()
        .map(|p| signed(p, side, p.value() + position_bonus(p)))
        .sum()
}

pub fn mobility(board: &mut Board, side: Color) -> i32 {
    let own = board.legal_moves(side).len() as i32;
    let theirs = board.legal_moves(side.opposite()).len() as i32;
    (own - theirs) * MOBILITY_WEIGHT
}

pub fn king_safety(board: &Board, side: Color) -> i32 {
    let mut score = 0;
    if board.is_king_in_check(side) {
        score -= CHECK_PENALTY;
    }
    if board.is_king_in_check(side.opposite()) {
        score += CHECK_PENALTY;
    }
    score
}
