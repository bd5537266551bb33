//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular (or vice versa). They jump over pieces, so only the
//! destination square matters: it must be on the board and either empty or
//! held by an opposing piece.

use super::generate_offset_moves;
use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Color, Move, Position};

pub fn generate_knight_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    generate_offset_moves(board, from, color, &KNIGHT_OFFSETS, moves);
}
