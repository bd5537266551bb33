//! Game lifecycle management
//!
//! Creating games, and swapping in a stored board and turn.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Color;

/// A game in progress: the board plus the side to move.
///
/// A `Game` is single-threaded. Legality checks mutate the board in place and
/// restore it before returning, which is why they take `&mut self`; callers
/// sharing a game across threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub(super) board: Board,
    pub(super) turn: Color,
}

impl Game {
    /// Standard opening position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            turn: Color::White,
        }
    }

    /// Resume a game from a stored board and side to move.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    pub fn team_turn(&self) -> Color {
        self.turn
    }

    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the whole board. The side to move is left as it is.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
