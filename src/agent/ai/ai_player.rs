//! AiPlayer - minimax player with difficulty levels
//!
//! Wraps a [`SearchEngine`] bound to one side and exposes it through the
//! [`Player`] trait. Difficulty only selects the search depth; the search
//! itself is always fixed-depth and deterministic, so the same position
//! always yields the same move.
//!
//! # Examples
//!
//! ```
//! use chess_minimax::agent::ai::{AiPlayer, Difficulty};
//! use chess_minimax::agent::Player;
//! use chess_minimax::game_repr::{Board, Color};
//!
//! let mut board = Board::new();
//! let mut ai = AiPlayer::with_difficulty(Color::White, Difficulty::Easy);
//! let mv = ai.get_move(&mut board).expect("opening position has moves");
//! board.play(mv).unwrap();
//! ```

use std::fmt;
use std::str::FromStr;

use crate::agent::player::Player;
use crate::game_repr::{Board, Color, Move};
use super::search::{SearchConfig, SearchEngine};

/// AI difficulty levels that map to search depth.
///
/// Each level is a fixed ply count; there is no time control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 2
    Easy,
    /// Depth 4, the engine's standard strength
    #[default]
    Medium,
    /// Depth 6. Slow: the move generator sweeps all 64 destinations per piece.
    Hard,
}

impl Difficulty {
    /// Number of plies (half-moves) to search.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::with_depth(self.max_depth())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Player backed by the minimax search.
pub struct AiPlayer {
    engine: SearchEngine,
    difficulty: Difficulty,
    name: String,
}

impl AiPlayer {
    pub fn new(color: Color, difficulty: Difficulty, name: String) -> Self {
        Self {
            engine: SearchEngine::with_config(color, difficulty.search_config()),
            difficulty,
            name,
        }
    }

    /// Player named "AI ({difficulty})".
    pub fn with_difficulty(color: Color, difficulty: Difficulty) -> Self {
        Self::new(color, difficulty, format!("AI ({})", difficulty))
    }

    pub fn color(&self) -> Color {
        self.engine.side()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.engine.set_config(difficulty.search_config());
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty);
        }
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    /// Blocks for the whole search and needs the board exclusively until
    /// it returns.
    fn get_move(&mut self, board: &mut Board) -> Option<Move> {
        self.engine.choose_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 2);
        assert_eq!(Difficulty::Medium.max_depth(), 4);
        assert_eq!(Difficulty::Hard.max_depth(), 6);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("grandmaster".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_set_difficulty_renames() {
        let mut ai = AiPlayer::with_difficulty(Color::Black, Difficulty::Easy);
        assert_eq!(ai.name(), "AI (Easy)");
        ai.set_difficulty(Difficulty::Hard);
        assert_eq!(ai.name(), "AI (Hard)");
        assert_eq!(ai.engine().config().depth, 6);
        assert_eq!(ai.color(), Color::Black);
    }
}
