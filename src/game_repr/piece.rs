use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Material worth used by the evaluator.
    pub fn value(&self) -> i32 {
        match self {
            Type::Pawn => 1,
            Type::Knight => 3,
            Type::Bishop => 3,
            Type::Rook => 5,
            Type::Queen => 9,
            Type::King => 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn push. White starts at the bottom (row 6)
    /// and walks toward row 0.
    pub fn pawn_direction(&self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board. It remembers its own square and whether it has
/// ever moved; both are rewritten in place by every move and restored by
/// every undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, piece_type: Type, square: Square) -> Self {
        Self {
            color,
            piece_type,
            square,
            has_moved: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn value(&self) -> i32 {
        self.piece_type.value()
    }

    pub fn symbol(&self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, Type::King) => '♔',
            (Color::White, Type::Queen) => '♕',
            (Color::White, Type::Rook) => '♖',
            (Color::White, Type::Bishop) => '♗',
            (Color::White, Type::Knight) => '♘',
            (Color::White, Type::Pawn) => '♙',
            (Color::Black, Type::King) => '♚',
            (Color::Black, Type::Queen) => '♛',
            (Color::Black, Type::Rook) => '♜',
            (Color::Black, Type::Bishop) => '♝',
            (Color::Black, Type::Knight) => '♞',
            (Color::Black, Type::Pawn) => '♟',
        }
    }
}
