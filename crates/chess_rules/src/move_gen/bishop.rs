//! Bishop move generation
//!
//! Bishops slide diagonally until blocked by another piece or the board edge.

use super::sliding;
use crate::board::Board;
use crate::constants::DIAGONAL_DIRS;
use crate::types::{Color, Move, Position};

pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &DIAGONAL_DIRS, moves);
}
