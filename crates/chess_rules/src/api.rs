//! Public game API
//!
//! [`Game`] owns a [`Board`](crate::board::Board) and the side to move, and is
//! the only place legality is decided.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle and (re)hydration (new, with_board, set_board)
//! - `moves` - Legal move sets and move execution (valid_moves, make_move)
//! - `state` - Check, checkmate and stalemate queries

mod game;
mod moves;
mod state;

#[cfg(test)]
mod tests;

pub use game::Game;
pub use state::GameStatus;
