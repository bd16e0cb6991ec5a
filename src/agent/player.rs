//! Player trait for entities that pick moves.
//!
//! The orchestrator hands the current [`Board`] to the side to move and
//! commits whatever move comes back through [`Board::play`], so an
//! implementation never has to validate its own choice.
//!
//! # Exclusive access
//!
//! `get_move` receives `&mut Board`. Move generation and search try moves
//! directly on that board and take them back before returning, so the
//! board must not be read or written by anyone else during the call. A
//! host that runs the search on another thread hands the board over for
//! the duration and takes it back afterwards.

use crate::game_repr::{Board, GameResult, Move};

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented.
pub trait Player {
    /// Request the next move for the side to move.
    ///
    /// Returns `None` when the player has no move to offer. The board must
    /// be left exactly as it was received.
    fn get_move(&mut self, board: &mut Board) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Display name used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
