//! Outcome of a board, derived on demand.

use super::rules;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// Never stored: [`Outcome::of`] recomputes it from the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// The mark holds a winning line.
    Win(Mark),
    /// Board is full without a winner.
    Tie,
}

impl Outcome {
    /// Derives the outcome, checking for a winner before a tie.
    pub fn of(board: &Board) -> Self {
        if let Some(mark) = rules::winner(board) {
            Outcome::Win(mark)
        } else if rules::is_tie(board) {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// True once the game can accept no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
