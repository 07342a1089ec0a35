//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the board, the outcome and the opponent policy can
//! share one definition of a winning line.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{LINES, is_winner, winner, winning_line};
