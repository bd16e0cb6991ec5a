//! Chess rules engine with a fixed-depth minimax player.
//!
//! - [`game_repr`]: board, pieces, legal move generation, check and game end
//! - [`agent`]: the [`Player`](agent::Player) trait, the minimax AI and a random mover
//! - [`orchestrator`]: headless turn loop over one board and two players
//! - [`config`]: game and player configuration

pub mod agent;
pub mod config;
pub mod game_repr;
pub mod orchestrator;
