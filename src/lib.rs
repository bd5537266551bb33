//! Command-line referee built on [`chess_rules`].
//!
//! - **[`cli`]** - argument parsing (`play`, `moves`, `--json`, `-v`)
//! - **[`replay`]** - replays a move list from the opening and renders reports

pub mod cli;
pub mod replay;

pub use cli::{Cli, Command};
pub use replay::{run, MovesReport, PlayReport};
