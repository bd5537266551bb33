//! # Board geometry constants
//!
//! Movement is expressed as `(d_row, d_col)` deltas applied to a
//! [`Position`](crate::types::Position). Row grows towards Black's side of the
//! board, column grows from the a-file to the h-file.
//!
//! - **Orthogonal**: the four rook rays (N, S, E, W)
//! - **Diagonal**: the four bishop rays (NE, NW, SE, SW)
//! - **Knight**: the eight L-shaped jumps (2+1 / 1+2)
//! - **King**: the eight adjacent squares
//!
//! The order of each table is the order in which generated moves appear, so
//! changing it changes the order of `valid_moves` results.

use crate::types::PieceType;

/// Squares per side.
pub const BOARD_SIZE: i8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

/// Back rank from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Promotion choices, in the order promotion moves are generated.
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
];
