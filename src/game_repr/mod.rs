mod board;
mod error;
mod moves;
mod piece;
mod piece_moves;
mod simulation;

#[cfg(test)]
mod tests;

pub use board::*;
pub use error::*;
pub use moves::*;
pub use piece::*;
pub use simulation::*;
