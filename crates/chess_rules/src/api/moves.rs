//! Legal move sets and move execution
//!
//! Legality is decided by simulation. Each pseudo-legal candidate is played on
//! the real board while the mover's king is tested for check, then the board
//! is put back. No copy of the board is made per candidate.

use tracing::{debug, trace};

use super::Game;
use crate::error::{ChessError, ChessResult, InvalidMoveReason};
use crate::move_gen::MoveGenerator;
use crate::types::{Color, Move, Piece, Position};

impl Game {
    /// Legal moves for the piece on `start`.
    ///
    /// Returns `None` if the square is empty or off the board. An existing
    /// piece with no legal moves yields `Some` of an empty vector. Moves keep
    /// generation order.
    pub fn valid_moves(&mut self, start: Position) -> Option<Vec<Move>> {
        if !start.is_on_board() {
            return None;
        }
        let piece = self.board.get_piece(start)?;
        let candidates =
            MoveGenerator::new(piece.color()).piece_moves(&self.board, start, piece.kind());

        let legal: Vec<Move> = candidates
            .into_iter()
            .filter(|&mv| self.keeps_king_safe(piece, mv))
            .collect();
        trace!(square = %start, count = legal.len(), "filtered legal moves");
        Some(legal)
    }

    /// Every legal move for `color`, in board scan order.
    pub fn all_valid_moves(&mut self, color: Color) -> Vec<Move> {
        self.board
            .team_positions(color)
            .into_iter()
            .flat_map(|pos| self.valid_moves(pos).unwrap_or_default())
            .collect()
    }

    /// Play `mv` for the side to move and pass the turn.
    ///
    /// # Errors
    ///
    /// [`ChessError::InvalidMove`] if the start square is empty or off the
    /// board, holds a piece of the side not on move, or `mv` is not among its
    /// legal moves. The board and turn are untouched on error.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        let invalid = |reason| ChessError::InvalidMove { mv, reason };

        let piece = Some(mv.start())
            .filter(Position::is_on_board)
            .and_then(|start| self.board.get_piece(start))
            .ok_or_else(|| invalid(InvalidMoveReason::NoPiece))?;
        if piece.color() != self.turn {
            return Err(invalid(InvalidMoveReason::OutOfTurn));
        }

        let legal = self.valid_moves(mv.start()).unwrap_or_default();
        if !legal.contains(&mv) {
            return Err(invalid(InvalidMoveReason::Illegal));
        }

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(piece.color(), kind),
            None => piece,
        };
        self.board.add_piece(mv.start(), None);
        self.board.add_piece(mv.end(), Some(placed));
        self.turn = self.turn.opponent();

        debug!(%mv, color = ?piece.color(), next = ?self.turn, "move applied");
        Ok(())
    }

    /// Simulate `mv` in place and report whether the mover's king is safe
    /// afterwards. The board is restored before returning.
    fn keeps_king_safe(&mut self, piece: Piece, mv: Move) -> bool {
        let captured = self.board.get_piece(mv.end());
        self.board.add_piece(mv.start(), None);
        self.board.add_piece(mv.end(), Some(piece));

        let safe = !self.is_in_check(piece.color());

        self.board.add_piece(mv.start(), Some(piece));
        self.board.add_piece(mv.end(), captured);
        safe
    }
}
