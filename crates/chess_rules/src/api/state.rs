//! Check, checkmate and stalemate queries
//!
//! The engine never ends a game on its own. After each move the caller polls
//! these queries (or [`Game::status`]) and decides what to do.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Game;
use crate::move_gen::is_square_threatened;
use crate::types::Color;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Game {
    /// Is the king of `color` attacked?
    ///
    /// A side without a king is never reported in check. With several kings
    /// only the first in row-major order is tested.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_position(color) {
            Some(king) => is_square_threatened(&self.board, king, color),
            None => {
                warn!(?color, "check test on a side without a king");
                false
            }
        }
    }

    /// In check with no legal move.
    pub fn is_in_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Not in check, but no legal move.
    pub fn is_in_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Status for the side to move.
    pub fn status(&mut self) -> GameStatus {
        let color = self.turn;
        let in_check = self.is_in_check(color);
        match (in_check, self.has_any_valid_move(color)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Playing,
        }
    }

    fn has_any_valid_move(&mut self, color: Color) -> bool {
        self.board
            .team_positions(color)
            .into_iter()
            .any(|pos| self.valid_moves(pos).is_some_and(|moves| !moves.is_empty()))
    }
}
