//! # Chess rules engine
//!
//! Board model, per-piece move generation, legality filtering against
//! self-check, and check / checkmate / stalemate detection.
//!
//! ## Module Organization
//!
//! ### Values
//! - **[`types`]** - `Color`, `PieceType`, `Piece`, `Position`, `Move`
//! - **[`constants`]** - direction tables, back-rank order, promotion choices
//! - **[`notation`]** - `e2e4` / `e7e8q` text form for squares and moves
//!
//! ### Board and rules
//! - **[`board`]** - 8x8 grid, standard setup, king lookup
//! - **[`move_gen`]** - pseudo-legal move generation and threat detection
//! - **[`api`]** - [`Game`]: legal moves, move execution, game state queries
//!
//! ## Example
//!
//! ```
//! use chess_rules::{Game, GameStatus, Move};
//!
//! let mut game = Game::new();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     let mv: Move = text.parse().unwrap();
//!     game.make_move(mv).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate);
//! ```
//!
//! Not supported: castling, en passant, draw rules other than stalemate.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod notation;
pub mod types;

pub use api::{Game, GameStatus};
pub use board::Board;
pub use error::{ChessError, ChessResult, InvalidMoveReason, NotationError};
pub use move_gen::MoveGenerator;
pub use types::{Color, Move, Piece, PieceType, Position};
