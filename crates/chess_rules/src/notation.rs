//! Coordinate notation for squares and moves
//!
//! Squares use algebraic form (`e4` is row 4, column 5). Moves are written as
//! start square, end square and an optional promotion letter: `e2e4`,
//! `e7e8q`. Promotion letters are accepted in either case and always printed
//! lower-case. A move promoting to a king or pawn prints as `k` / `p` but does
//! not parse back.

use std::fmt;
use std::str::FromStr;

use crate::constants::BOARD_SIZE;
use crate::error::NotationError;
use crate::types::{Move, PieceType, Position};

impl PieceType {
    /// Lower-case promotion letter, or `None` for kings and pawns.
    pub fn promotion_letter(self) -> Option<char> {
        match self {
            PieceType::Queen => Some('q'),
            PieceType::Rook => Some('r'),
            PieceType::Bishop => Some('b'),
            PieceType::Knight => Some('n'),
            PieceType::King | PieceType::Pawn => None,
        }
    }

    pub fn from_promotion_letter(letter: char) -> Result<PieceType, NotationError> {
        match letter.to_ascii_lowercase() {
            'q' => Ok(PieceType::Queen),
            'r' => Ok(PieceType::Rook),
            'b' => Ok(PieceType::Bishop),
            'n' => Ok(PieceType::Knight),
            _ => Err(NotationError::InvalidPromotion(letter)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{})", self.row(), self.col());
        }
        let file = (b'a' + (self.col() - 1) as u8) as char;
        write!(f, "{}{}", file, self.row())
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotationError::InvalidSquare(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..b'a' + BOARD_SIZE as u8).contains(&file)
            || !(b'1'..b'1' + BOARD_SIZE as u8).contains(&rank)
        {
            return Err(invalid());
        }
        Ok(Position::new((rank - b'0') as i8, (file - b'a') as i8 + 1))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start(), self.end())?;
        if let Some(kind) = self.promotion() {
            let letter = kind
                .promotion_letter()
                .unwrap_or_else(|| kind.symbol().to_ascii_lowercase());
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(NotationError::InvalidMove(s.to_string()));
        }
        let start: Position = text[0..2]
            .parse()
            .map_err(|_| NotationError::InvalidMove(s.to_string()))?;
        let end: Position = text[2..4]
            .parse()
            .map_err(|_| NotationError::InvalidMove(s.to_string()))?;
        let promotion = text[4..]
            .chars()
            .next()
            .map(PieceType::from_promotion_letter)
            .transpose()?;
        Ok(Move::new(start, end, promotion))
    }
}
