//! Menu and replay loop around individual matches.

use crate::config::GameConfig;
use crate::console::Prompter;
use crate::orchestrator::{MatchResult, Orchestrator, Seat};
use crate::players::{ComputerPlayer, HumanPlayer, Participant};
use crate::session::{GameMode, Player, PlayerType, Scoreboard};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Main application state: config plus the scoreboard for this run.
pub struct App {
    config: GameConfig,
    scoreboard: Scoreboard,
    matches_started: u64,
}

impl App {
    /// Creates a new application.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            scoreboard: Scoreboard::new(),
            matches_started: 0,
        }
    }

    /// Gets the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Runs menus and matches until the user leaves.
    ///
    /// With `mode` set, the first match starts without showing the menu.
    #[instrument(skip(self, prompter))]
    pub async fn run(&mut self, prompter: &mut dyn Prompter, mode: Option<GameMode>) -> Result<()> {
        let mut pending = mode;

        loop {
            let mode = match pending.take() {
                Some(mode) => mode,
                None => match self.menu(prompter).await? {
                    Some(mode) => mode,
                    None => break,
                },
            };

            let result = self.play(mode, prompter).await?;
            self.record(&result);
            if self.scoreboard.games() > 0 {
                prompter.say(&self.scoreboard.summary()).await?;
            }

            let again = prompter.ask("Do you want to play again? (y/n): ").await?;
            if !again.is_some_and(|answer| answer.eq_ignore_ascii_case("y")) {
                break;
            }
        }

        prompter.say("Goodbye!").await?;
        Ok(())
    }

    /// Shows the main menu until the user picks a mode or quits.
    async fn menu(&mut self, prompter: &mut dyn Prompter) -> Result<Option<GameMode>> {
        loop {
            prompter.say("Welcome to Tic Tac Toe!").await?;
            prompter
                .say("1. Play single player game against the computer")
                .await?;
            prompter.say("2. Play two player game").await?;
            prompter.say("3. Quit").await?;

            match prompter.ask("Enter your choice: ").await?.as_deref() {
                Some("1") => return Ok(Some(GameMode::Single)),
                Some("2") => return Ok(Some(GameMode::Two)),
                Some("3") | None => return Ok(None),
                Some(other) => {
                    debug!(choice = other, "Unknown menu choice");
                    prompter.say("Invalid choice. Please try again.").await?;
                }
            }
        }
    }

    /// Plays one match in `mode`.
    #[instrument(skip(self, prompter))]
    pub async fn play(&mut self, mode: GameMode, prompter: &mut dyn Prompter) -> Result<MatchResult> {
        let [first, second] = mode.players(&self.config);
        let mut orchestrator = Orchestrator::new(self.seat(first), self.seat(second));
        self.matches_started += 1;

        let result = orchestrator.run(prompter).await?;
        info!(?result, "Match finished");
        Ok(result)
    }

    fn seat(&self, player: Player) -> Seat {
        let participant: Box<dyn Participant> = match player.player_type() {
            PlayerType::Human => Box::new(HumanPlayer::new(player.name().clone())),
            PlayerType::Computer => Box::new(ComputerPlayer::new(
                player.name().clone(),
                *player.mark(),
                *self.config.strategy(),
                // One seeded stream per match.
                self.config
                    .seed()
                    .map(|seed| seed.wrapping_add(self.matches_started)),
            )),
        };
        Seat::new(player, participant)
    }

    fn record(&mut self, result: &MatchResult) {
        match result {
            MatchResult::Won { name, .. } => self.scoreboard.record_win(name),
            MatchResult::Tie => self.scoreboard.record_tie(),
            MatchResult::Quit => {}
        }
    }
}
