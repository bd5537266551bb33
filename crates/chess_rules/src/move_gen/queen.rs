//! Queen move generation
//!
//! Queens combine the bishop and rook patterns. Diagonal moves are generated
//! first, then orthogonal ones.

use super::bishop;
use super::rook;
use crate::board::Board;
use crate::types::{Color, Move, Position};

pub fn generate_queen_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    bishop::generate_bishop_moves(board, from, color, moves);
    rook::generate_rook_moves(board, from, color, moves);
}
