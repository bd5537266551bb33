//! # Core value types
//!
//! The engine works on three small immutable values:
//!
//! - [`Position`] - a 1-indexed `(row, column)` square. Row 1 is White's back
//!   rank, column 1 is the a-file.
//! - [`Piece`] - a `(color, type)` pair. Promotion never mutates a piece; the
//!   promoted piece is a fresh value.
//! - [`Move`] - start square, end square and an optional promotion type.
//!
//! All three compare and hash by value, so moves can be looked up in a legal
//! move list with plain `contains`.
//!
//! Positions outside the board are representable (offset arithmetic produces
//! them freely while scanning rays), but nothing may index a [`Board`] with one.
//! Every consumer checks [`Position::is_on_board`] first.
//!
//! [`Board`]: crate::board::Board

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// Side of a piece, and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn push (+1 for White, -1 for Black).
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row the pawns start on.
    #[inline]
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Row the major pieces start on.
    #[inline]
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => BOARD_SIZE,
        }
    }

    /// Row on which a pawn of this color promotes.
    #[inline]
    pub fn promotion_rank(self) -> i8 {
        self.opponent().back_rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Upper-case letter used for board diagrams (`N` for knight).
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
        }
    }
}

/// A chess piece. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    #[serde(rename = "type")]
    kind: PieceType,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceType {
        self.kind
    }

    /// Diagram letter: upper-case for White, lower-case for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

/// A square, 1-indexed. May lie off the board; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    #[inline]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i8 {
        self.col
    }

    #[inline]
    pub fn is_on_board(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }

    /// The square `d_row` rows and `d_col` columns away. No bounds check.
    #[inline]
    pub fn offset(&self, d_row: i8, d_col: i8) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// All 64 squares, row 1 first, column 1 first within a row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Row-major index 0-63 into board storage.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        debug_assert!(self.is_on_board(), "square {:?} is off the board", self);
        (self.row as usize - 1) * BOARD_SIZE as usize + (self.col as usize - 1)
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Position {
        let size = BOARD_SIZE as usize;
        Position::new((index / size) as i8 + 1, (index % size) as i8 + 1)
    }
}

/// A move from `start` to `end`, optionally promoting.
///
/// Two moves are equal only if all three fields match, so `e7e8q` and `e7e8n`
/// are distinct entries in a legal move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl Move {
    pub const fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Move {
            start,
            end,
            promotion,
        }
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }
}
