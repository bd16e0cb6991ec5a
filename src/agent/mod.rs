pub mod player;
pub use player::*;

pub mod random_player;
pub use random_player::*;

pub mod ai;
pub use ai::{AiPlayer, Difficulty, SearchConfig, SearchEngine, SearchResult};
