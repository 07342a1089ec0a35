//! Command-line interface for the tic-tac-toe binary.

use crate::games::tictactoe::Strategy;
use crate::session::GameMode;
use clap::Parser;

/// Tic Tac Toe - play in the terminal against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Start straight into a game mode instead of showing the menu
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// How the computer picks moves (heuristic or random)
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Seed for the computer's random picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long)]
    pub computer_first: bool,
}
