//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, step one square at a time from the start square:
//! 1. Off the board: stop
//! 2. Empty square: record a quiet move, keep stepping
//! 3. Opponent piece: record the capture, stop
//! 4. Own piece: stop without recording
//!
//! ## Performance
//!
//! - **Time complexity**: O(7) squares per direction at most
//! - **Typical moves per square**: 14 for rooks, 7-13 for bishops, 21-27 for queens

use super::check_open_spot;
use crate::board::Board;
use crate::types::{Color, Move, Position};

/// Cast a ray from `start` by `(d_row, d_col)` and collect the reachable squares.
///
/// The ray includes the first opposing piece it meets and excludes the first
/// friendly piece.
///
/// # Examples
///
/// ```
/// use chess_rules::board::Board;
/// use chess_rules::move_gen::ray_cast;
/// use chess_rules::types::{Color, Position};
///
/// let board = Board::new();
/// let mut moves = Vec::new();
/// ray_cast(&board, Position::new(1, 1), Color::White, 1, 1, &mut moves);
/// assert_eq!(moves.len(), 7);
/// ```
pub fn ray_cast(
    board: &Board,
    start: Position,
    color: Color,
    d_row: i8,
    d_col: i8,
    moves: &mut Vec<Move>,
) {
    let mut current = start.offset(d_row, d_col);
    loop {
        if check_open_spot(board, current, color, false) {
            moves.push(Move::new(start, current, None));
            current = current.offset(d_row, d_col);
        } else {
            if check_open_spot(board, current, color, true) {
                moves.push(Move::new(start, current, None));
            }
            break;
        }
    }
}

/// Cast one ray per direction in `dirs`.
pub(super) fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in dirs {
        ray_cast(board, from, color, d_row, d_col, moves);
    }
}
