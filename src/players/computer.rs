//! Computer opponent driven by the move policy.

use super::{Participant, Turn};
use crate::console::Prompter;
use crate::games::tictactoe::{Board, Mark, Strategy, decide};
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Computer player that picks moves with a [`Strategy`].
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    strategy: Strategy,
    rng: ChaCha8Rng,
}

impl ComputerPlayer {
    /// Creates a computer player for `mark`, seeded for reproducible games
    /// when `seed` is given.
    pub fn new(name: impl Into<String>, mark: Mark, strategy: Strategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            name: name.into(),
            mark,
            strategy,
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Participant for ComputerPlayer {
    #[instrument(skip(self, board, prompter))]
    async fn next_move(&mut self, board: &Board, prompter: &mut dyn Prompter) -> Result<Turn> {
        let decision = decide(board, self.mark, self.mark.opponent(), self.strategy, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        let index = decision.position().to_index();
        debug!(player = %self.name, position = index, rule = %decision.rule(), "Computer chose move");
        prompter
            .say(&format!("{} chose position: {}", self.name, index))
            .await?;

        Ok(Turn::Move(*decision.position()))
    }
}
