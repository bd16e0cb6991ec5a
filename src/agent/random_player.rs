use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::game_repr::{Board, Move};

/// Picks uniformly among the legal moves of the side to move.
///
/// Seeded, so a game against it can be replayed exactly.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: format!("Random ({})", seed),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &mut Board) -> Option<Move> {
        let side = board.side_to_move();
        let moves = board.legal_moves(side);
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
