//! Replaying move lists and rendering the results

use anyhow::{Context, Result};
use chess_rules::board::Board;
use chess_rules::{Color, Game, GameStatus, Move, Piece, Position};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, Command};

/// Position reached after `play`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    pub moves_played: usize,
    pub turn: Color,
    pub status: GameStatus,
    pub board: Board,
}

/// Legal moves of one square after `moves`.
///
/// `moves` is `None` when the square is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovesReport {
    pub square: String,
    pub piece: Option<Piece>,
    pub moves: Option<Vec<String>>,
}

/// Play `moves` in order from the standard opening.
///
/// Fails on the first move that does not parse or is rejected by the game,
/// naming its 1-based index.
pub fn replay<S: AsRef<str>>(moves: &[S]) -> Result<Game> {
    let mut game = Game::new();
    for (i, text) in moves.iter().enumerate() {
        let text = text.as_ref();
        let mv: Move = text
            .parse()
            .with_context(|| format!("move {} ({}) is not valid notation", i + 1, text))?;
        game.make_move(mv)
            .with_context(|| format!("move {} ({}) rejected", i + 1, text))?;
        debug!(ply = i + 1, %mv, "replayed");
    }
    info!(plies = moves.len(), "replay finished");
    Ok(game)
}

pub fn play_report<S: AsRef<str>>(moves: &[S]) -> Result<PlayReport> {
    let mut game = replay(moves)?;
    Ok(PlayReport {
        moves_played: moves.len(),
        turn: game.team_turn(),
        status: game.status(),
        board: game.board().clone(),
    })
}

pub fn moves_report<S: AsRef<str>>(square: &str, history: &[S]) -> Result<MovesReport> {
    let pos: Position = square
        .parse()
        .with_context(|| format!("{} is not a square", square))?;
    let mut game = replay(history)?;

    let moves = game
        .valid_moves(pos)
        .map(|moves| moves.iter().map(Move::to_string).collect());
    Ok(MovesReport {
        square: pos.to_string(),
        piece: game.board().get_piece(pos),
        moves,
    })
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

impl PlayReport {
    pub fn render_text(&self) -> String {
        format!(
            "{}turn: {}\nstatus: {}\n",
            self.board,
            color_name(self.turn),
            self.status
        )
    }
}

impl MovesReport {
    pub fn render_text(&self) -> String {
        match (&self.piece, &self.moves) {
            (Some(piece), Some(moves)) if moves.is_empty() => {
                format!("{} {}: no legal moves\n", piece.symbol(), self.square)
            }
            (Some(piece), Some(moves)) => {
                format!("{} {}: {}\n", piece.symbol(), self.square, moves.join(" "))
            }
            _ => format!("no piece on {}\n", self.square),
        }
    }
}

/// Execute a parsed command line and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Play { moves } => {
            let report = play_report(moves)?;
            if cli.json {
                Ok(serde_json::to_string_pretty(&report).context("encoding play report")?)
            } else {
                Ok(report.render_text())
            }
        }
        Command::Moves { square, play } => {
            let report = moves_report(square, play)?;
            if cli.json {
                Ok(serde_json::to_string_pretty(&report).context("encoding moves report")?)
            } else {
                Ok(report.render_text())
            }
        }
    }
}
