use std::fmt;

use log::{debug, info};

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

const BACK_RANK: [Type; BOARD_SIZE] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Side to move has no legal moves and is not in check
    Stalemate,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate => None,
        }
    }
}

/// The 8x8 grid, side to move, game-over state and a per-side index of
/// king squares.
///
/// Exactly one king per side is on the board at all times. The king index
/// is kept in step by every commit, [`Board::apply`] and [`Board::undo`], so
/// check queries never have to search for the king.
///
/// Queries that enumerate legal moves take `&mut self`: each candidate is
/// played on the real grid, tested and taken back. Nothing else may observe
/// the board while one of those calls is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    side_to_move: Color,
    result: Option<GameResult>,
    king_squares: [Square; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position, White to move.
    pub fn new() -> Board {
        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];

        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            squares[0][col as usize] = Some(Piece::new(Color::Black, piece_type, Square::new(0, col)));
            squares[1][col as usize] = Some(Piece::new(Color::Black, Type::Pawn, Square::new(1, col)));
            squares[6][col as usize] = Some(Piece::new(Color::White, Type::Pawn, Square::new(6, col)));
            squares[7][col as usize] = Some(Piece::new(Color::White, piece_type, Square::new(7, col)));
        }

        Self {
            squares,
            side_to_move: Color::White,
            result: None,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
        }
    }

    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.row()][sq.col()].as_ref()
    }

    /// Piece lookup by raw coordinates; `None` when empty or off the board.
    pub fn get_piece(&self, row: i32, col: i32) -> Option<&Piece> {
        Square::try_new(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// Every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().flatten()
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Validates and commits a move given as raw coordinates.
    ///
    /// Checks, in order: both squares on the board, a piece on the source,
    /// the piece belongs to the side to move, the piece's movement rule
    /// accepts the destination, and the mover's king is not left in check.
    /// The board is unchanged if any check fails.
    pub fn make_move(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<(), MoveError> {
        let from = Square::try_new(from_row, from_col).ok_or(MoveError::OutOfBounds)?;
        let to = Square::try_new(to_row, to_col).ok_or(MoveError::OutOfBounds)?;
        self.play(Move::new(from, to))
    }

    /// Same as [`Board::make_move`] for an already-built [`Move`].
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = *self.piece_at(mv.from()).ok_or(MoveError::EmptySquare(mv.from()))?;

        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourPiece(self.side_to_move));
        }

        if !piece.is_legal_destination(mv.to(), self) {
            return Err(MoveError::IllegalGeometry);
        }

        if self.leaves_king_in_check(mv) {
            return Err(MoveError::LeavesKingInCheck);
        }

        self.commit(mv);
        debug!("{} played {}", piece.color, mv);
        Ok(())
    }

    fn commit(&mut self, mv: Move) {
        // the undo record is dropped: this one stays
        let _ = self.apply(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.update_result();
    }

    fn update_result(&mut self) {
        let side = self.side_to_move;
        if self.has_legal_moves(side) {
            return;
        }

        let result = if self.is_king_in_check(side) {
            info!("Checkmate! {} wins", side.opposite());
            GameResult::from_winner(side.opposite())
        } else {
            info!("Stalemate! It's a draw");
            GameResult::Stalemate
        };
        self.result = Some(result);
    }

    /// Whether any piece of the other side has a geometrically valid move
    /// onto `color`'s king. Enemy moves are not themselves filtered for
    /// self-check.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let king_sq = self.king_square(color);
        self.pieces()
            .filter(|p| p.color != color)
            .any(|p| p.is_legal_destination(king_sq, self))
    }

    /// Plays `mv` in place, asks whether the mover's king is attacked, and
    /// takes it back.
    pub fn leaves_king_in_check(&mut self, mv: Move) -> bool {
        let Some(color) = self.piece_at(mv.from()).map(Piece::color) else {
            return false;
        };
        let sim = self.simulate(mv);
        sim.is_king_in_check(color)
    }

    /// Legal moves of the piece on `from`, destinations in row-major order.
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_from_into(from, &mut moves);
        moves
    }

    fn legal_moves_from_into(&mut self, from: Square, moves: &mut MoveList) {
        let Some(piece) = self.piece_at(from).copied() else {
            return;
        };

        for to in Square::all() {
            if !piece.is_legal_destination(to, self) {
                continue;
            }
            let mv = Move::new(from, to);
            if !self.leaves_king_in_check(mv) {
                moves.push(mv);
            }
        }
    }

    /// All legal moves for `color`: sources row-major, then destinations
    /// row-major. Search tie-breaking depends on this order.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for from in Square::all() {
            if self.piece_at(from).is_some_and(|p| p.is(color)) {
                self.legal_moves_from_into(from, &mut moves);
            }
        }
        moves
    }

    /// Stops at the first legal move found.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        for from in Square::all() {
            let Some(piece) = self.piece_at(from).copied() else {
                continue;
            };
            if !piece.is(color) {
                continue;
            }
            for to in Square::all() {
                if piece.is_legal_destination(to, self) && !self.leaves_king_in_check(Move::new(from, to)) {
                    return true;
                }
            }
        }
        false
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_moves(color)
    }

    /// Perft - counts leaf nodes of the legal move tree, starting with the
    /// side to move. Side to move alternates by ply.
    pub fn perft(&mut self, depth: u32) -> u64 {
        let side = self.side_to_move;
        self.perft_for(side, depth)
    }

    fn perft_for(&mut self, side: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut sim = self.simulate(mv);
            nodes += sim.perft_for(side.opposite(), depth - 1);
        }
        nodes
    }

    pub(crate) fn set_slot(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.col()] = piece;
    }

    pub(crate) fn take_slot(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        self.king_squares[color.index()] = sq;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: Vec<String> = row
                .iter()
                .map(|slot| slot.map_or('.', |p| p.symbol()).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Places pieces on an empty board and validates the result.
///
/// ```
/// use chess_minimax::game_repr::{Board, Color, Square, Type};
///
/// let board = Board::builder()
///     .piece(Color::White, Type::King, Square::new(7, 4))
///     .piece(Color::Black, Type::King, Square::new(0, 4))
///     .piece(Color::White, Type::Rook, Square::new(7, 0))
///     .build()
///     .unwrap();
/// assert_eq!(board.pieces().count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    pub fn piece(mut self, color: Color, piece_type: Type, square: Square) -> Self {
        self.pieces.push(Piece::new(color, piece_type, square));
        self
    }

    /// A piece that has already moved (pawns lose their double step).
    pub fn moved_piece(mut self, color: Color, piece_type: Type, square: Square) -> Self {
        let mut piece = Piece::new(color, piece_type, square);
        piece.has_moved = true;
        self.pieces.push(piece);
        self
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Requires exactly one king per side, at most one piece per square and
    /// the side not to move out of check. The game-end state of the side to
    /// move is evaluated immediately.
    pub fn build(self) -> Result<Board, SetupError> {
        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut kings: [Option<Square>; 2] = [None, None];

        for piece in self.pieces {
            let slot = &mut squares[piece.square.row()][piece.square.col()];
            if slot.is_some() {
                return Err(SetupError::SquareOccupied(piece.square));
            }
            if piece.piece_type == Type::King {
                let king = &mut kings[piece.color.index()];
                if king.is_some() {
                    return Err(SetupError::DuplicateKing(piece.color));
                }
                *king = Some(piece.square);
            }
            *slot = Some(piece);
        }

        let white_king = kings[Color::White.index()].ok_or(SetupError::MissingKing(Color::White))?;
        let black_king = kings[Color::Black.index()].ok_or(SetupError::MissingKing(Color::Black))?;

        let mut board = Board {
            squares,
            side_to_move: self.side_to_move,
            result: None,
            king_squares: [white_king, black_king],
        };

        let waiting = board.side_to_move.opposite();
        if board.is_king_in_check(waiting) {
            return Err(SetupError::OpponentInCheck(waiting));
        }

        board.update_result();
        Ok(board)
    }
}
