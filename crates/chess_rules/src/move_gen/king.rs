//! King move generation
//!
//! Kings move one square in any direction (8 possible destinations). Squares
//! held by own pieces are excluded; moving into check is filtered later by
//! the legality pass, not here.
//!
//! Castling is not supported.

use super::generate_offset_moves;
use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::types::{Color, Move, Position};

pub fn generate_king_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    generate_offset_moves(board, from, color, &KING_OFFSETS, moves);
}
