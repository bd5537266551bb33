//! Error types for the rules engine
//!
//! The engine itself has a single failure mode: [`ChessError::InvalidMove`],
//! raised by `Game::make_move`. Parsing squares and moves from text has its own
//! [`NotationError`].

use std::fmt;

use thiserror::Error;

use crate::types::Move;

/// Errors raised by engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move was rejected; board and turn are unchanged
    #[error("Invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: InvalidMoveReason },
}

/// Why a move was rejected. All reasons are the same error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// No piece on the start square
    NoPiece,
    /// The piece on the start square belongs to the side not on move
    OutOfTurn,
    /// Not in the legal move set of the start square
    Illegal,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::NoPiece => "no piece on the start square",
            InvalidMoveReason::OutOfTurn => "piece moved out of turn",
            InvalidMoveReason::Illegal => "not a legal move for this piece",
        };
        f.write_str(text)
    }
}

/// Errors parsing coordinate notation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid square notation: {0:?} (expected a1-h8)")]
    InvalidSquare(String),

    #[error("Invalid move notation: {0:?} (expected e.g. e2e4 or e7e8q)")]
    InvalidMove(String),

    #[error("Invalid promotion piece: {0:?} (expected one of q, r, b, n)")]
    InvalidPromotion(char),
}

/// Result type alias for engine operations
pub type ChessResult<T> = Result<T, ChessError>;
