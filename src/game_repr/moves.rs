use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

pub const BOARD_SIZE: usize = 8;

/*-------COORDINATES--------*/

// row 0 = Black's back rank, row 7 = White's back rank
// col 0 = a-file

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Builds a square from coordinates already known to be on the board.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is 8 or more. Use [`Square::try_new`] for
    /// unchecked input.
    pub const fn new(row: u8, col: u8) -> Square {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE, "square off the board");
        Square { row, col }
    }

    /// Checked constructor for coordinates coming from outside the crate.
    pub fn try_new(row: i32, col: i32) -> Option<Square> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Signed (row, col) offset from `self` to `other`.
    pub fn delta(&self, other: Square) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }

    /// Central 4x4 block, rows and cols 2..=5.
    pub fn is_central(&self) -> bool {
        (2..=5).contains(&self.row) && (2..=5).contains(&self.col)
    }

    /// Innermost 2x2 block, rows and cols 3..=4.
    pub fn is_inner_center(&self) -> bool {
        (3..=4).contains(&self.row) && (3..=4).contains(&self.col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move from one square to another.
///
/// `score` is scratch space for the search: the engine fills it in on the
/// move it returns. It takes no part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    pub score: Option<i32>,
}

pub type MoveList = SmallVec<[Move; 64]>;

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Self {
            from,
            to,
            score: None,
        }
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
