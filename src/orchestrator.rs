//! Headless game coordination.
//!
//! The [`Orchestrator`] owns the [`Board`] and one [`Player`] per side and
//! runs the turn loop:
//!
//! ```text
//! [Request Move] -> [Player provides move] -> [Board::play]
//!   -> [Notify opponent] -> [Check end] -> [Request Move] ...
//! ```
//!
//! The board is only ever handed to one player at a time, which is the
//! whole of the synchronisation the search needs.

use std::fmt;

use log::{debug, info};

use crate::agent::ai::AiPlayer;
use crate::agent::player::Player;
use crate::agent::random_player::RandomPlayer;
use crate::config::{GameConfig, PlayerConfig};
use crate::game_repr::{Board, Color, GameResult, Move, MoveError};

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// A player offered a move the board rejected
    #[error("{player} ({color}) offered illegal move {mv}: {source}")]
    IllegalMove {
        player: String,
        color: Color,
        mv: Move,
        #[source]
        source: MoveError,
    },

    /// A player returned no move although the game is not over
    #[error("{player} ({color}) offered no move")]
    NoMove { player: String, color: Color },
}

/// Outcome of [`Orchestrator::run`].
#[derive(Debug, Clone)]
pub struct GameSummary {
    /// `None` if the ply limit was reached first
    pub result: Option<GameResult>,
    pub plies: usize,
    pub moves: Vec<Move>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Some(GameResult::WhiteWins) => write!(f, "White wins after {} plies", self.plies),
            Some(GameResult::BlackWins) => write!(f, "Black wins after {} plies", self.plies),
            Some(GameResult::Stalemate) => write!(f, "Draw by stalemate after {} plies", self.plies),
            None => write!(f, "No result after {} plies", self.plies),
        }
    }
}

pub struct Orchestrator {
    board: Board,
    /// (white_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),
    history: Vec<Move>,
}

impl Orchestrator {
    pub fn new(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            board,
            players: (white, black),
            history: Vec::new(),
        }
    }

    /// Standard starting position with the players described by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Board::new(),
            build_player(config.white, Color::White),
            build_player(config.black, Color::Black),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Asks the side to move for a move and commits it.
    ///
    /// Returns `Ok(None)` without asking anyone if the game is already over.
    pub fn play_turn(&mut self) -> Result<Option<Move>, OrchestratorError> {
        if self.board.is_game_over() {
            return Ok(None);
        }

        let color = self.board.side_to_move();
        let (player, _) = seats(&mut self.players, color);
        let name = player.name().to_string();

        // the player gets the real board; it must give it back unchanged
        let offered = player.get_move(&mut self.board);

        let mv = offered.ok_or_else(|| OrchestratorError::NoMove {
            player: name.clone(),
            color,
        })?;

        self.board
            .play(mv)
            .map_err(|source| OrchestratorError::IllegalMove {
                player: name.clone(),
                color,
                mv,
                source,
            })?;
        self.history.push(mv);
        debug!("ply {}: {} ({}) {}", self.history.len(), name, color, mv);

        let (_, opponent) = seats(&mut self.players, color);
        opponent.opponent_moved(mv);

        if let Some(result) = self.board.result() {
            self.handle_game_end(result);
        }

        Ok(Some(mv))
    }

    /// Plays until the game ends or `max_plies` plies have been played in
    /// this call.
    pub fn run(&mut self, max_plies: Option<usize>) -> Result<GameSummary, OrchestratorError> {
        let mut plies = 0;
        while !self.board.is_game_over() && max_plies.map_or(true, |max| plies < max) {
            self.play_turn()?;
            plies += 1;
        }

        if !self.board.is_game_over() {
            info!("Stopped after {} plies without a result", plies);
        }

        Ok(GameSummary {
            result: self.board.result(),
            plies,
            moves: self.history.clone(),
        })
    }

    fn handle_game_end(&mut self, result: GameResult) {
        info!("Game over after {} plies: {:?}", self.history.len(), result);
        let (white, black) = &mut self.players;
        white.game_ended(result);
        black.game_ended(result);
    }
}

/// (player to move, opponent)
fn seats(
    players: &mut (Box<dyn Player>, Box<dyn Player>),
    color: Color,
) -> (&mut dyn Player, &mut dyn Player) {
    let (white, black) = players;
    match color {
        Color::White => (white.as_mut(), black.as_mut()),
        Color::Black => (black.as_mut(), white.as_mut()),
    }
}

pub fn build_player(config: PlayerConfig, color: Color) -> Box<dyn Player> {
    match config {
        PlayerConfig::AI { difficulty } => Box::new(AiPlayer::with_difficulty(color, difficulty)),
        PlayerConfig::Random { seed } => Box::new(RandomPlayer::new(seed)),
    }
}
