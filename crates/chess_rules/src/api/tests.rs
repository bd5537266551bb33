//! Test suite for legality filtering, move execution and game state
//!
//! # Test Organization
//!
//! - `test_valid_moves_*` - self-check filtering and the empty-square signal
//! - `test_make_move_*` - turn handling, promotion, rejection leaves state intact
//! - `test_check_*` / `test_checkmate_*` / `test_stalemate_*` - state queries

use super::*;
use crate::board::Board;
use crate::error::{ChessError, InvalidMoveReason};
use crate::types::{Color, Move, Piece, PieceType, Position};

fn sq(text: &str) -> Position {
    text.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn create_test_game(pieces: &[(PieceType, Color, &str)], turn: Color) -> Game {
    let mut board = Board::new();
    for &(kind, color, square) in pieces {
        board.add_piece(sq(square), Some(Piece::new(color, kind)));
    }
    Game::with_board(board, turn)
}

fn assert_rejected(game: &mut Game, text: &str, reason: InvalidMoveReason) {
    let before = game.clone();
    let result = game.make_move(mv(text));
    assert_eq!(
        result,
        Err(ChessError::InvalidMove {
            mv: mv(text),
            reason
        })
    );
    assert_eq!(*game, before, "rejected move {} must not change the game", text);
}

// ============================================================================
// Legal Move Tests
// ============================================================================

#[test]
fn test_new_game_starts_white_on_standard_board() {
    let game = Game::new();
    assert_eq!(game.team_turn(), Color::White);
    assert_eq!(*game.board(), Board::standard());
}

#[test]
fn test_valid_moves_empty_square_is_none() {
    //! "No piece here" is distinct from "a piece with no moves".
    let mut game = Game::new();
    assert_eq!(game.valid_moves(sq("e4")), None);
    assert_eq!(game.valid_moves(sq("a1")), Some(vec![]));
}

#[test]
fn test_valid_moves_pinned_piece_stays_on_line() {
    //! A rook pinned on the e-file may only slide along the pin or take the
    //! pinning piece.
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::White, "e3"),
            (PieceType::Rook, Color::Black, "e6"),
            (PieceType::King, Color::Black, "a8"),
        ],
        Color::White,
    );

    let moves = game.valid_moves(sq("e3")).unwrap();
    let ends: Vec<Position> = moves.iter().map(|m| m.end()).collect();
    assert_eq!(ends, vec![sq("e4"), sq("e5"), sq("e6"), sq("e2")]);
}

#[test]
fn test_valid_moves_king_cannot_step_into_attack() {
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Rook, Color::Black, "a2"),
            (PieceType::King, Color::Black, "e8"),
        ],
        Color::White,
    );

    let moves = game.valid_moves(sq("e1")).unwrap();
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.end().row() == 1));
}

#[test]
fn test_valid_moves_never_leave_king_in_check() {
    //! Replaying every returned move from a busy middlegame never exposes the
    //! mover's king.
    let mut game = Game::new();
    for text in ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6"] {
        game.make_move(mv(text)).unwrap();
    }

    for color in [Color::White, Color::Black] {
        for candidate in game.all_valid_moves(color) {
            let mut probe = game.clone();
            probe.set_team_turn(color);
            probe.make_move(candidate).unwrap();
            assert!(!probe.is_in_check(color), "{} leaves {:?} in check", candidate, color);
        }
    }
}

#[test]
fn test_valid_moves_restore_board() {
    let mut game = Game::new();
    game.make_move(mv("e2e4")).unwrap();
    let before = game.board().clone();

    for pos in Position::all() {
        let _ = game.valid_moves(pos);
    }

    assert_eq!(*game.board(), before);
}

#[test]
fn test_check_must_be_answered() {
    //! In check, only moves that resolve the check survive.
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Knight, Color::White, "b1"),
            (PieceType::Pawn, Color::White, "h2"),
            (PieceType::Rook, Color::Black, "e8"),
            (PieceType::King, Color::Black, "a8"),
        ],
        Color::White,
    );

    assert!(game.is_in_check(Color::White));
    assert_eq!(game.valid_moves(sq("h2")), Some(vec![]));
    assert_eq!(game.valid_moves(sq("b1")), Some(vec![]));

    let king_moves = game.valid_moves(sq("e1")).unwrap();
    assert!(king_moves.iter().all(|m| m.end().col() != 5));
    assert_eq!(king_moves.len(), 4);
}

#[test]
fn test_valid_moves_off_board_is_none() {
    let mut game = Game::new();
    let before = game.clone();
    for pos in [
        Position::new(9, 1),
        Position::new(0, 5),
        Position::new(4, 0),
        Position::new(-1, 9),
    ] {
        assert_eq!(game.valid_moves(pos), None, "square {}", pos);
    }
    assert_eq!(game, before);
}

// ============================================================================
// Move Execution Tests
// ============================================================================

#[test]
fn test_make_move_alternates_turns() {
    let mut game = Game::new();
    game.make_move(mv("e2e4")).unwrap();
    assert_eq!(game.team_turn(), Color::Black);
    game.make_move(mv("c7c5")).unwrap();
    assert_eq!(game.team_turn(), Color::White);

    assert_eq!(game.board().get_piece(sq("e2")), None);
    assert_eq!(
        game.board().get_piece(sq("e4")),
        Some(Piece::new(Color::White, PieceType::Pawn))
    );
}

#[test]
fn test_make_move_out_of_turn() {
    let mut game = Game::new();
    assert_rejected(&mut game, "e7e5", InvalidMoveReason::OutOfTurn);
}

#[test]
fn test_make_move_from_empty_square() {
    let mut game = Game::new();
    assert_rejected(&mut game, "e4e5", InvalidMoveReason::NoPiece);
}

#[test]
fn test_make_move_illegal_geometry() {
    let mut game = Game::new();
    assert_rejected(&mut game, "e2e5", InvalidMoveReason::Illegal);
    assert_rejected(&mut game, "b1b3", InvalidMoveReason::Illegal);
    assert_rejected(&mut game, "a1a3", InvalidMoveReason::Illegal);
}

#[test]
fn test_make_move_into_check_rejected() {
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "e1"),
            (PieceType::Bishop, Color::White, "e2"),
            (PieceType::Rook, Color::Black, "e8"),
            (PieceType::King, Color::Black, "a8"),
        ],
        Color::White,
    );
    assert_rejected(&mut game, "e2d3", InvalidMoveReason::Illegal);
}

#[test]
fn test_make_move_promotion() {
    let mut game = create_test_game(
        &[
            (PieceType::Pawn, Color::White, "g7"),
            (PieceType::King, Color::White, "a1"),
            (PieceType::King, Color::Black, "a8"),
        ],
        Color::White,
    );

    assert_rejected(&mut game, "g7g8", InvalidMoveReason::Illegal);

    game.make_move(mv("g7g8n")).unwrap();
    assert_eq!(
        game.board().get_piece(sq("g8")),
        Some(Piece::new(Color::White, PieceType::Knight))
    );
    assert_eq!(game.board().get_piece(sq("g7")), None);
}

#[test]
fn test_make_move_rejects_promotion_on_normal_move() {
    let mut game = Game::new();
    assert_rejected(&mut game, "e2e4q", InvalidMoveReason::Illegal);
}

#[test]
fn test_make_move_off_board_start_rejected() {
    //! A decoded move can carry any row and column; an off-board start is
    //! reported like an empty square.
    let mut game = Game::new();
    let before = game.clone();
    let decoded: Move = serde_json::from_str(
        r#"{"start":{"row":0,"col":5},"end":{"row":2,"col":5},"promotion":null}"#,
    )
    .unwrap();

    assert_eq!(
        game.make_move(decoded),
        Err(ChessError::InvalidMove {
            mv: decoded,
            reason: InvalidMoveReason::NoPiece
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_make_move_off_board_end_rejected() {
    let mut game = Game::new();
    let before = game.clone();
    let off = Move::new(sq("e2"), Position::new(9, 5), None);

    assert_eq!(
        game.make_move(off),
        Err(ChessError::InvalidMove {
            mv: off,
            reason: InvalidMoveReason::Illegal
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_make_move_capture_replaces_piece() {
    let mut game = Game::new();
    for text in ["e2e4", "d7d5", "e4d5"] {
        game.make_move(mv(text)).unwrap();
    }
    assert_eq!(
        game.board().get_piece(sq("d5")),
        Some(Piece::new(Color::White, PieceType::Pawn))
    );
    assert_eq!(game.board().team_positions(Color::Black).len(), 15);
}

// ============================================================================
// Game State Tests
// ============================================================================

#[test]
fn test_checkmate_back_rank() {
    //! Lone king on a1, rook checking along the first rank, black king on b3
    //! covering the a2 and b2 escapes.
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "a1"),
            (PieceType::Rook, Color::Black, "h1"),
            (PieceType::King, Color::Black, "b3"),
        ],
        Color::White,
    );

    assert!(game.is_in_check(Color::White));
    assert!(game.is_in_checkmate(Color::White));
    assert!(!game.is_in_stalemate(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn test_check_with_escape_is_not_mate() {
    //! With the black king far away on h8 the white king walks out via a2/b2.
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "a1"),
            (PieceType::Rook, Color::Black, "h1"),
            (PieceType::King, Color::Black, "h8"),
        ],
        Color::White,
    );

    assert!(game.is_in_check(Color::White));
    assert!(!game.is_in_checkmate(Color::White));
    assert_eq!(game.status(), GameStatus::Check);

    let escapes: Vec<Position> = game
        .valid_moves(sq("a1"))
        .unwrap()
        .iter()
        .map(|m| m.end())
        .collect();
    assert_eq!(escapes, vec![sq("a2"), sq("b2")]);
}

#[test]
fn test_stalemate_corner_king() {
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "a1"),
            (PieceType::Queen, Color::Black, "b3"),
            (PieceType::King, Color::Black, "c2"),
        ],
        Color::White,
    );

    assert!(!game.is_in_check(Color::White));
    assert!(game.is_in_stalemate(Color::White));
    assert!(!game.is_in_checkmate(Color::White));
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.status().is_over());
}

#[test]
fn test_stalemate_requires_every_piece_stuck() {
    //! A blocked pawn has no moves, but the free king keeps the game going.
    let mut game = create_test_game(
        &[
            (PieceType::King, Color::White, "h1"),
            (PieceType::Pawn, Color::White, "a4"),
            (PieceType::Pawn, Color::Black, "a5"),
            (PieceType::King, Color::Black, "e8"),
        ],
        Color::White,
    );

    assert_eq!(game.valid_moves(sq("a4")), Some(vec![]));
    assert!(!game.is_in_stalemate(Color::White));
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.make_move(mv(text)).unwrap();
    }
    assert!(game.is_in_checkmate(Color::White));
    assert!(!game.is_in_checkmate(Color::Black));
    assert!(game.all_valid_moves(Color::White).is_empty());
}

#[test]
fn test_kingless_side_is_never_in_check() {
    let game = create_test_game(&[(PieceType::Rook, Color::Black, "e8")], Color::White);
    assert!(!game.is_in_check(Color::White));
}

#[test]
fn test_set_board_replaces_position() {
    let mut game = Game::new();
    game.make_move(mv("e2e4")).unwrap();

    game.set_board(Board::standard());
    assert_eq!(*game.board(), Board::standard());
    assert_eq!(game.team_turn(), Color::Black);

    game.set_team_turn(Color::White);
    assert_eq!(game, Game::new());
}
