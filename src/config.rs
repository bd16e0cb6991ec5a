//! Game configuration.
//!
//! A [`GameConfig`] describes who plays each side and how long a game may
//! run; [`Orchestrator::from_config`](crate::orchestrator::Orchestrator::from_config)
//! turns it into a running game.

use std::fmt;
use std::str::FromStr;

use crate::agent::ai::{Difficulty, ParseDifficultyError};

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Minimax player with specified difficulty
    AI { difficulty: Difficulty },
    /// Uniformly random legal moves from a seeded generator
    Random { seed: u64 },
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::AI {
            difficulty: Difficulty::default(),
        }
    }
}

impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerConfig::AI { difficulty } => write!(f, "AI ({})", difficulty),
            PlayerConfig::Random { seed } => write!(f, "Random ({})", seed),
        }
    }
}

/// Accepts a difficulty name, `random` (seed 0) or `random:<seed>`.
impl FromStr for PlayerConfig {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower == "random" {
            return Ok(PlayerConfig::Random { seed: 0 });
        }
        if let Some(seed) = lower.strip_prefix("random:") {
            return seed
                .parse()
                .map(|seed| PlayerConfig::Random { seed })
                .map_err(|_| ParseDifficultyError(s.to_string()));
        }
        Ok(PlayerConfig::AI {
            difficulty: lower.parse()?,
        })
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white: PlayerConfig,
    /// Configuration for the Black player
    pub black: PlayerConfig,
    /// Stop after this many plies even without a result
    pub max_plies: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::ai_vs_ai(Difficulty::Easy, Difficulty::Medium, Some(200))
    }
}

impl GameConfig {
    pub fn ai_vs_ai(white: Difficulty, black: Difficulty, max_plies: Option<usize>) -> Self {
        Self {
            white: PlayerConfig::AI { difficulty: white },
            black: PlayerConfig::AI { difficulty: black },
            max_plies,
        }
    }

    /// Random mover as White against the AI as Black.
    pub fn random_vs_ai(seed: u64, difficulty: Difficulty, max_plies: Option<usize>) -> Self {
        Self {
            white: PlayerConfig::Random { seed },
            black: PlayerConfig::AI { difficulty },
            max_plies,
        }
    }

    pub fn random_vs_random(white_seed: u64, black_seed: u64, max_plies: Option<usize>) -> Self {
        Self {
            white: PlayerConfig::Random { seed: white_seed },
            black: PlayerConfig::Random { seed: black_seed },
            max_plies,
        }
    }
}
