//! Match controller: alternates turns between two participants.

use crate::console::Prompter;
use crate::games::tictactoe::{Board, Mark, Outcome};
use crate::players::{Participant, Turn};
use crate::session::Player;
use anyhow::Result;
use tracing::{debug, info, instrument, warn};

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A player completed a line.
    Won {
        /// Winner's name.
        name: String,
        /// Winner's mark.
        mark: Mark,
    },
    /// Board filled with no winner.
    Tie,
    /// A participant quit or input ran out.
    Quit,
}

/// A player together with whatever produces its moves.
pub struct Seat {
    player: Player,
    participant: Box<dyn Participant>,
}

impl Seat {
    /// Seats `participant` as `player`.
    pub fn new(player: Player, participant: Box<dyn Participant>) -> Self {
        Self {
            player,
            participant,
        }
    }
}

/// Orchestrates one match between two seats on a board it owns.
pub struct Orchestrator {
    board: Board,
    seats: [Seat; 2],
    to_move: usize,
}

impl Orchestrator {
    /// Creates a match; the first seat moves first.
    pub fn new(first: Seat, second: Seat) -> Self {
        Self {
            board: Board::new(),
            seats: [first, second],
            to_move: 0,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until someone wins, the board fills, or a
    /// participant quits.
    ///
    /// A refused placement costs nothing: the same seat is asked again.
    #[instrument(skip_all, fields(
        first = %self.seats[0].player.name(),
        second = %self.seats[1].player.name()
    ))]
    pub async fn run(&mut self, prompter: &mut dyn Prompter) -> Result<MatchResult> {
        info!("Starting match");
        self.board.reset();
        self.to_move = 0;

        loop {
            prompter.say(&self.board.display()).await?;

            let seat = &mut self.seats[self.to_move];
            let name = seat.player.name().clone();
            let mark = *seat.player.mark();

            debug!(player = %name, %mark, "Waiting for move");
            let position = match seat.participant.next_move(&self.board, prompter).await? {
                Turn::Quit => {
                    info!(player = %name, "Player quit");
                    prompter.say("Game Over! You quit the game.").await?;
                    return Ok(MatchResult::Quit);
                }
                Turn::Move(position) => position,
            };

            if let Err(e) = self.board.try_place(position.to_index(), mark) {
                warn!(player = %name, error = %e, "Move rejected");
                prompter.say("Invalid move. Try again.").await?;
                continue;
            }

            match self.board.outcome() {
                Outcome::Win(winner) => {
                    info!(player = %name, mark = %winner, "Match won");
                    prompter.say(&self.board.display()).await?;
                    prompter.say(&format!("Game Over! {} wins!", name)).await?;
                    return Ok(MatchResult::Won { name, mark: winner });
                }
                Outcome::Tie => {
                    info!("Match tied");
                    prompter.say(&self.board.display()).await?;
                    prompter.say("Game Over! It's a tie!").await?;
                    return Ok(MatchResult::Tie);
                }
                Outcome::InProgress => self.to_move = 1 - self.to_move,
            }
        }
    }
}
