//! Threat detection
//!
//! Decides whether a square is attacked by the opponent of a given color.
//! This is the core of check detection and therefore of legality filtering.
//!
//! ## Algorithm
//!
//! Rather than generating every opposing move, look outwards from the target
//! square once per threat category:
//!
//! 1. **Orthogonal rays** - the first piece met is an opposing rook or queen
//! 2. **Diagonal rays** - the first piece met is an opposing bishop or queen
//! 3. **Knight offsets** - an opposing knight sits an L-jump away
//! 4. **King offsets** - an opposing king is adjacent
//! 5. **Pawn squares** - an opposing pawn sits one row "ahead" of the target
//!    (ahead from the defender's point of view) on an adjacent column
//!
//! Candidate squares off the board are skipped.

use crate::board::Board;
use crate::constants::{DIAGONAL_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRS};
use crate::types::{Color, Piece, PieceType, Position};

/// Is `square` attacked by any piece not of `color`?
///
/// `color` is the defending side, usually the owner of the king on `square`.
///
/// # Examples
///
/// ```
/// use chess_rules::board::Board;
/// use chess_rules::move_gen::is_square_threatened;
/// use chess_rules::types::{Color, Piece, PieceType, Position};
///
/// let mut board = Board::new();
/// board.add_piece(Position::new(1, 8), Some(Piece::new(Color::Black, PieceType::Rook)));
/// assert!(is_square_threatened(&board, Position::new(1, 1), Color::White));
/// assert!(!is_square_threatened(&board, Position::new(2, 1), Color::White));
/// ```
pub fn is_square_threatened(board: &Board, square: Position, color: Color) -> bool {
    if slider_hit(board, square, color, &ORTHOGONAL_DIRS, &[PieceType::Rook, PieceType::Queen]) {
        return true;
    }
    if slider_hit(board, square, color, &DIAGONAL_DIRS, &[PieceType::Bishop, PieceType::Queen]) {
        return true;
    }
    if enemy_on_any(board, square, color, &KNIGHT_OFFSETS, PieceType::Knight) {
        return true;
    }
    if enemy_on_any(board, square, color, &KING_OFFSETS, PieceType::King) {
        return true;
    }

    // An attacking pawn moves against our forward direction, so it strikes
    // from one row ahead of the target.
    let pawn_offsets = [(color.forward(), -1), (color.forward(), 1)];
    enemy_on_any(board, square, color, &pawn_offsets, PieceType::Pawn)
}

fn slider_hit(
    board: &Board,
    square: Position,
    color: Color,
    dirs: &[(i8, i8)],
    kinds: &[PieceType],
) -> bool {
    dirs.iter().any(|&(d_row, d_col)| {
        first_piece_along(board, square, d_row, d_col)
            .is_some_and(|piece| piece.color() != color && kinds.contains(&piece.kind()))
    })
}

/// First occupied square stepping from `from` by `(d_row, d_col)`.
fn first_piece_along(board: &Board, from: Position, d_row: i8, d_col: i8) -> Option<Piece> {
    let mut current = from.offset(d_row, d_col);
    while current.is_on_board() {
        if let Some(piece) = board.get_piece(current) {
            return Some(piece);
        }
        current = current.offset(d_row, d_col);
    }
    None
}

fn enemy_on_any(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    kind: PieceType,
) -> bool {
    let attacker = Piece::new(color.opponent(), kind);
    offsets.iter().any(|&(d_row, d_col)| {
        let pos = from.offset(d_row, d_col);
        pos.is_on_board() && board.get_piece(pos) == Some(attacker)
    })
}
