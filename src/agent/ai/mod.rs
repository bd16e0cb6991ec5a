// AI Agent - Minimax with Alpha-Beta Pruning
//
// A classical fixed-depth game-tree search over a hand-written static
// evaluation. Deterministic: the same position always gives the same move.

mod ai_player;
mod evaluation;
mod search;

#[cfg(test)]
mod tests;

pub use ai_player::{AiPlayer, Difficulty, ParseDifficultyError};
pub use evaluation::evaluate;
pub use search::{SearchConfig, SearchEngine, SearchResult, DEFAULT_DEPTH, MAX_SCORE, MIN_SCORE};
