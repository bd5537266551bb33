//! Pseudo-legal move generation
//!
//! Produces every move a piece could make given board bounds and occupancy,
//! without asking whether the move leaves the mover's own king in check.
//! That filtering belongs to [`Game`](crate::api::Game).
//!
//! ## Dispatch
//!
//! Piece kinds are a closed set, so generation is a single `match` on
//! [`PieceType`] selecting one routine per submodule:
//!
//! - `pawn` - pushes, double push from the home rank, diagonal captures,
//!   promotion expansion
//! - `knight` / `king` - fixed offset tables
//! - `bishop` / `rook` / `queen` - rays via [`ray_cast`]
//!
//! `attack` answers the reverse question (is this square threatened?) by
//! looking outwards from the target square.

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;


pub use attack::is_square_threatened;
pub use sliding::ray_cast;

use crate::board::Board;
use crate::types::{Color, Move, PieceType, Position};

/// Move generator for one side. Holds no board between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGenerator {
    color: Color,
}

impl MoveGenerator {
    pub fn new(color: Color) -> Self {
        MoveGenerator { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Pseudo-legal moves for a `kind` piece of this generator's color on `from`.
    pub fn piece_moves(&self, board: &Board, from: Position, kind: PieceType) -> Vec<Move> {
        let mut moves = Vec::new();
        match kind {
            PieceType::Pawn => pawn::generate_pawn_moves(board, from, self.color, &mut moves),
            PieceType::Knight => knight::generate_knight_moves(board, from, self.color, &mut moves),
            PieceType::Bishop => bishop::generate_bishop_moves(board, from, self.color, &mut moves),
            PieceType::Rook => rook::generate_rook_moves(board, from, self.color, &mut moves),
            PieceType::Queen => queen::generate_queen_moves(board, from, self.color, &mut moves),
            PieceType::King => king::generate_king_moves(board, from, self.color, &mut moves),
        }
        moves
    }
}

/// Pseudo-legal moves for whatever piece stands on `from`.
///
/// Returns `None` when the square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Option<Vec<Move>> {
    let piece = board.get_piece(from)?;
    Some(MoveGenerator::new(piece.color()).piece_moves(board, from, piece.kind()))
}

/// Can a `color` piece land on `pos`?
///
/// - Off the board: never
/// - `for_capture == false`: only if the square is empty
/// - `for_capture == true`: only if the square holds an opposing piece
#[inline]
pub fn check_open_spot(board: &Board, pos: Position, color: Color, for_capture: bool) -> bool {
    if !pos.is_on_board() {
        return false;
    }
    match board.get_piece(pos) {
        Some(piece) => for_capture && piece.color() != color,
        None => !for_capture,
    }
}

/// Offset-table generation shared by knights and kings: each target is kept if
/// it is empty or holds an opposing piece.
fn generate_offset_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let to = from.offset(d_row, d_col);
        if check_open_spot(board, to, color, false) || check_open_spot(board, to, color, true) {
            moves.push(Move::new(from, to, None));
        }
    }
}
