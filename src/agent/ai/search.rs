// Fixed-depth minimax with alpha-beta pruning
//
// The engine plays one side. Maximizing nodes pick among that side's legal
// moves, minimizing nodes among the opponent's. Every move is tried on the
// caller's board through `Board::simulate`, so the board is back in its
// original state when a call returns, including after a cutoff.
//
// There is no iterative deepening, time limit or cancellation: a call
// always runs to the configured depth.

use log::{debug, trace};

use crate::game_repr::{Board, Color, Move};
use super::evaluation::evaluate;

/// Plies searched when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 4;

/// Score of a node whose side to move has no legal moves, from the
/// maximizer's point of view. Also the initial fold value.
pub const MIN_SCORE: i32 = i32::MIN;
pub const MAX_SCORE: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search below the root; 0 is treated as 1.
    pub depth: u8,
    /// With `false` every sibling is explored. Scores are identical
    /// either way, only the node count changes.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
}

/// Minimax engine bound to one side.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    side: Color,
    config: SearchConfig,
    nodes: u64,
}

impl SearchEngine {
    pub fn new(side: Color) -> Self {
        Self::with_config(side, SearchConfig::default())
    }

    pub fn with_config(side: Color, config: SearchConfig) -> Self {
        Self {
            side,
            config,
            nodes: 0,
        }
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Best move for the engine's side, or `None` if it has no legal move.
    /// The returned move carries its score.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        self.analyze(board).best_move
    }

    /// Root of the search. Each root move is searched with a full window;
    /// the first move with the strictly highest score wins.
    pub fn analyze(&mut self, board: &mut Board) -> SearchResult {
        self.nodes = 0;
        let depth = self.config.depth.max(1);

        let mut best: Option<Move> = None;
        let mut best_score = MIN_SCORE;

        for mut mv in board.legal_moves(self.side) {
            let score = {
                let mut sim = board.simulate(mv);
                self.search(&mut sim, depth - 1, MIN_SCORE, MAX_SCORE, false)
            };
            trace!("{} scores {}", mv, score);

            if best.is_none() || score > best_score {
                mv.score = Some(score);
                best = Some(mv);
                best_score = score;
            }
        }

        match best {
            Some(mv) => debug!(
                "{} chose {} (score {}, depth {}, {} nodes)",
                self.side, mv, best_score, depth, self.nodes
            ),
            None => debug!("{} has no legal moves", self.side),
        }

        SearchResult {
            best_move: best,
            score: best_score,
            depth,
            nodes_searched: self.nodes,
        }
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Leaf when `depth == 0` or the board is marked game over; leaves are
    /// scored by the static evaluator. A node whose side has no legal moves
    /// returns its fold start value, [`MIN_SCORE`] when maximizing and
    /// [`MAX_SCORE`] when minimizing.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return evaluate(board, self.side);
        }

        let side = if maximizing {
            self.side
        } else {
            self.side.opposite()
        };
        let moves = board.legal_moves(side);

        if maximizing {
            let mut max_eval = MIN_SCORE;
            for mv in moves {
                let eval = {
                    let mut sim = board.simulate(mv);
                    self.search(&mut sim, depth - 1, alpha, beta, false)
                };
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if self.config.alpha_beta && beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = MAX_SCORE;
            for mv in moves {
                let eval = {
                    let mut sim = board.simulate(mv);
                    self.search(&mut sim, depth - 1, alpha, beta, true)
                };
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if self.config.alpha_beta && beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Static evaluation from the engine's side.
    pub fn evaluate(&self, board: &mut Board) -> i32 {
        evaluate(board, self.side)
    }

    /// Nodes visited by the last [`analyze`](Self::analyze) call.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }
}
