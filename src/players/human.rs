//! Human player that types moves at the prompt.

use super::{Participant, Turn};
use crate::console::Prompter;
use crate::games::tictactoe::{Board, Position};
use anyhow::Result;
use tracing::{debug, instrument};

/// Human player reading moves from the console.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Participant for HumanPlayer {
    #[instrument(skip(self, _board, prompter))]
    async fn next_move(&mut self, _board: &Board, prompter: &mut dyn Prompter) -> Result<Turn> {
        let prompt = format!("Enter a move for {} (0-8), or 'q' to quit: ", self.name);

        loop {
            let Some(input) = prompter.ask(&prompt).await? else {
                debug!(player = %self.name, "Input closed, treating as quit");
                return Ok(Turn::Quit);
            };

            if input.eq_ignore_ascii_case("q") {
                return Ok(Turn::Quit);
            }

            match Position::parse(&input) {
                Some(position) => return Ok(Turn::Move(position)),
                None => {
                    debug!(player = %self.name, %input, "Unparseable move");
                    prompter.say("Invalid input. Try again.").await?;
                }
            }
        }
    }
}
