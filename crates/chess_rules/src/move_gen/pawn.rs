//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion expansion
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square towards the opponent, onto an empty square
//! - **Double push**: from the home rank (row 2 for white, row 7 for black),
//!   only if the single push is possible and the second square is empty
//! - **Captures**: one square diagonally forward, onto an opposing piece only
//! - **Promotion**: any move reaching the last rank becomes four moves, one per
//!   promotion type (queen, rook, knight, bishop)
//!
//! En passant is not supported.

use super::check_open_spot;
use crate::board::Board;
use crate::constants::PROMOTION_TYPES;
use crate::types::{Color, Move, Position};

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The board to generate on
/// * `from` - Square of the pawn
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append moves to
pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    let direction = color.forward();

    let one_step = from.offset(direction, 0);
    let can_move_one = check_open_spot(board, one_step, color, false);
    if can_move_one {
        push_pawn_move(from, one_step, color, moves);
    }

    if can_move_one && from.row() == color.home_rank() {
        let two_step = from.offset(direction * 2, 0);
        if check_open_spot(board, two_step, color, false) {
            push_pawn_move(from, two_step, color, moves);
        }
    }

    for d_col in [-1, 1] {
        let target = from.offset(direction, d_col);
        if check_open_spot(board, target, color, true) {
            push_pawn_move(from, target, color, moves);
        }
    }
}

fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.row() == color.promotion_rank() {
        moves.extend(
            PROMOTION_TYPES
                .iter()
                .map(|&kind| Move::new(from, to, Some(kind))),
        );
    } else {
        moves.push(Move::new(from, to, None));
    }
}
