//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked by another piece or the
//! board edge.

use super::sliding;
use crate::board::Board;
use crate::constants::ORTHOGONAL_DIRS;
use crate::types::{Color, Move, Position};

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &ORTHOGONAL_DIRS, moves);
}
