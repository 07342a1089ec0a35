//! Players, game modes and the per-run scoreboard.

use crate::config::GameConfig;
use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Type of player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Human player at the terminal.
    Human,
    /// Computer opponent.
    Computer,
}

/// A player in a match: a display name and a mark, fixed for the match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Player's name.
    name: String,
    /// Which mark this player uses.
    mark: Mark,
    /// Type of player.
    player_type: PlayerType,
}

/// Who sits at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// One human against the computer.
    Single,
    /// Two humans sharing the terminal.
    Two,
}

impl GameMode {
    /// Builds both players in turn order for this mode.
    ///
    /// Player one takes the configured mark and the other player takes the
    /// opposite mark. In single player mode the computer moves first only
    /// when the config asks for it.
    #[instrument(skip(config))]
    pub fn players(self, config: &GameConfig) -> [Player; 2] {
        let one_mark = *config.player_one_mark();
        let player_one = Player::new(
            config.player_one_name().clone(),
            one_mark,
            PlayerType::Human,
        );

        match self {
            GameMode::Two => [
                player_one,
                Player::new(
                    config.player_two_name().clone(),
                    one_mark.opponent(),
                    PlayerType::Human,
                ),
            ],
            GameMode::Single => {
                let computer = Player::new(
                    config.computer_name().clone(),
                    one_mark.opponent(),
                    PlayerType::Computer,
                );
                if *config.computer_first() {
                    debug!("Computer takes the first move");
                    [computer, player_one]
                } else {
                    [player_one, computer]
                }
            }
        }
    }
}

/// Wins per player name and ties, across the matches of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: BTreeMap<String, u32>,
    ties: u32,
    games: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `name`.
    pub fn record_win(&mut self, name: &str) {
        *self.wins.entry(name.to_string()).or_default() += 1;
        self.games += 1;
    }

    /// Counts a tie.
    pub fn record_tie(&mut self) {
        self.ties += 1;
        self.games += 1;
    }

    /// Wins recorded for `name`.
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Ties recorded.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Finished games recorded (quits are not counted).
    pub fn games(&self) -> u32 {
        self.games
    }

    /// One-line summary, e.g. `Score: Computer 1, Player 1 2, ties 0`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .wins
            .iter()
            .map(|(name, wins)| format!("{} {}", name, wins))
            .collect();
        parts.push(format!("ties {}", self.ties));
        format!("Score: {}", parts.join(", "))
    }
}
