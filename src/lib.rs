//! Strictly Tic-Tac-Toe - a terminal game with a heuristic opponent
//!
//! The engine is a 3x3 [`Board`] that refuses illegal placements and
//! answers win/tie queries, plus a stateless move policy for the computer.
//! Around it sits a thin prompt loop: an [`Orchestrator`] that alternates
//! turns and an [`App`] with the menu, replay prompt and scoreboard.
//!
//! # Architecture
//!
//! - **Engine**: [`Board`], [`Position`], [`Outcome`], [`choose_move`]
//! - **Players**: [`HumanPlayer`] and [`ComputerPlayer`] behind [`Participant`]
//! - **Controller**: [`Orchestrator`] for one match, [`App`] for a session
//! - **I/O**: [`Prompter`], implemented by [`Console`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Mark, Position, choose_move};
//! use rand::SeedableRng;
//!
//! let mut board = Board::new();
//! assert!(board.place(0, Mark::O));
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! assert_eq!(choose_move(&board, Mark::X, Mark::O, &mut rng), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod cli;
mod config;
mod console;
mod games;
mod orchestrator;
mod players;
mod session;

// Crate-level exports - Application and CLI
pub use app::App;
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal I/O
pub use console::{Console, Prompter};

// Crate-level exports - Match control
pub use orchestrator::{MatchResult, Orchestrator, Seat};
pub use players::{ComputerPlayer, HumanPlayer, Participant, Turn};
pub use session::{GameMode, Player, PlayerType, Scoreboard};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, Cell, Decision, LINES, Mark, Outcome, PlaceError, Position, Rule,
    Strategy, choose_move, decide, winning_line,
};
