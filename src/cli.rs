//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "referee", version, about = "Referee standard chess games from the command line")]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay moves from the opening and print the resulting position
    Play {
        /// Moves in coordinate form, e.g. e2e4 e7e5 or e7e8q
        #[arg(value_name = "MOVE")]
        moves: Vec<String>,
    },
    /// List the legal moves of the piece on a square
    Moves {
        /// Square to inspect, e.g. e2
        square: String,

        /// Moves to replay from the opening first
        #[arg(long = "play", value_name = "MOVE", num_args = 1..)]
        play: Vec<String>,
    },
}

impl Cli {
    /// Default filter directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
