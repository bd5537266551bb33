//! Board model
//!
//! An 8x8 grid of optional pieces with the lookups the rules need:
//! - Square placement and queries
//! - Standard opening setup
//! - King lookup and per-color occupancy
//!
//! Squares are addressed with 1-indexed [`Position`]s. Passing an off-board
//! position to [`Board::add_piece`] or [`Board::get_piece`] is a caller bug and
//! panics; move generation bounds-checks every square before touching the grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BACK_RANK_ORDER, BOARD_SIZE, SQUARE_COUNT};
use crate::types::{Color, Piece, PieceType, Position};

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Full board content. Equality and hashing compare every square.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// A board in the standard opening position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.reset_board();
        board
    }

    /// Rebuild a board from its 64-square content (row 1 column 1 first).
    pub fn from_squares(squares: [Option<Piece>; SQUARE_COUNT]) -> Self {
        let mut board = Board::new();
        for (index, piece) in squares.into_iter().enumerate() {
            board.add_piece(Position::from_index(index), piece);
        }
        board
    }

    /// The 64-square content, row 1 column 1 first.
    pub fn squares(&self) -> [Option<Piece>; SQUARE_COUNT] {
        let mut squares = [None; SQUARE_COUNT];
        for pos in Position::all() {
            squares[pos.index()] = self.get_piece(pos);
        }
        squares
    }

    /// Place `piece` on `pos`, or clear it with `None`.
    #[inline]
    pub fn add_piece(&mut self, pos: Position, piece: Option<Piece>) {
        let (row, col) = grid_index(pos);
        self.grid[row][col] = piece;
    }

    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        let (row, col) = grid_index(pos);
        self.grid[row][col]
    }

    /// Clear the board and set up the standard opening position.
    pub fn reset_board(&mut self) {
        self.grid = Default::default();
        for (i, &kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = i as i8 + 1;
            for color in [Color::White, Color::Black] {
                self.add_piece(
                    Position::new(color.back_rank(), col),
                    Some(Piece::new(color, kind)),
                );
                self.add_piece(
                    Position::new(color.home_rank(), col),
                    Some(Piece::new(color, PieceType::Pawn)),
                );
            }
        }
    }

    /// First king of `color` in row-major order, if any.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(pos, _)| pos)
    }

    /// Every square holding a piece of `color`.
    pub fn team_positions(&self, color: Color) -> Vec<Position> {
        self.pieces()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get_piece(pos).map(|piece| (pos, piece)))
    }
}

#[inline]
fn grid_index(pos: Position) -> (usize, usize) {
    assert!(pos.is_on_board(), "square {:?} is off the board", pos);
    (pos.row() as usize - 1, pos.col() as usize - 1)
}

/// Row 8 first, one character per square, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            for col in 1..=BOARD_SIZE {
                let symbol = self
                    .get_piece(Position::new(row, col))
                    .map_or('.', |piece| piece.symbol());
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
