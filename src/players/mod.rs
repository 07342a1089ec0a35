//! Participant trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Prompter;
use crate::games::tictactoe::{Board, Position};
use anyhow::Result;

/// What a participant wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Play at this position.
    Move(Position),
    /// Abandon the match.
    Quit,
}

/// Trait for anything that can take a seat and make moves.
#[async_trait::async_trait]
pub trait Participant: Send {
    /// Gets the next move for the current board.
    ///
    /// The returned position is only a candidate: the controller still
    /// commits it through [`Board::place`], which may refuse it.
    async fn next_move(&mut self, board: &Board, prompter: &mut dyn Prompter) -> Result<Turn>;
}
