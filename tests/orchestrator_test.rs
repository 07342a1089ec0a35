//! Scripted matches through the controller and the menu loop.

use anyhow::Result;
use std::collections::VecDeque;
use strictly_tictactoe::{
    App, Board, ComputerPlayer, Console, GameConfig, GameMode, Mark, MatchResult, Orchestrator,
    Participant, Player, PlayerType, Position, Prompter, Seat, Strategy, Turn,
};

/// Participant that replays a fixed list of turns, then quits.
struct Scripted {
    turns: VecDeque<Turn>,
}

impl Scripted {
    fn new(moves: &[Position]) -> Self {
        Self {
            turns: moves.iter().copied().map(Turn::Move).collect(),
        }
    }
}

#[async_trait::async_trait]
impl Participant for Scripted {
    async fn next_move(&mut self, _board: &Board, _prompter: &mut dyn Prompter) -> Result<Turn> {
        Ok(self.turns.pop_front().unwrap_or(Turn::Quit))
    }
}

async fn run_app(config: GameConfig, mode: Option<GameMode>, input: &'static str) -> (App, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let mut app = App::new(config);
    app.run(&mut console, mode).await.unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (app, output)
}

#[tokio::test]
async fn test_two_player_column_win() {
    let (app, output) = run_app(GameConfig::default(), Some(GameMode::Two), "0\n1\n3\n4\n6\nn\n").await;

    assert!(output.contains("Enter a move for Player 1 (0-8), or 'q' to quit: "));
    assert!(output.contains("Enter a move for Player 2 (0-8), or 'q' to quit: "));
    assert!(output.contains("O | X | 2\n---------\nO | X | 5\n---------\nO | 7 | 8"));
    assert!(output.contains("Game Over! Player 1 wins!"));
    assert!(output.contains("Score: Player 1 1, ties 0"));
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(app.scoreboard().wins("Player 1"), 1);
}

#[tokio::test]
async fn test_bad_input_reprompts_same_player() {
    let (app, output) = run_app(
        GameConfig::default(),
        Some(GameMode::Two),
        "0\n0\nabc\n1\nq\nn\n",
    )
    .await;

    assert_eq!(output.matches("Invalid move. Try again.").count(), 1);
    assert_eq!(output.matches("Invalid input. Try again.").count(), 1);
    assert_eq!(output.matches("Enter a move for Player 2").count(), 3);
    assert!(output.contains("Game Over! You quit the game."));
    assert!(!output.contains("Score:"));
    assert_eq!(app.scoreboard().games(), 0);
}

#[tokio::test]
async fn test_undecodable_input_reprompts_same_player() {
    let mut console = Console::new(&b"\xff\xfe\n0\nq\nn\n"[..], Vec::new());
    let mut app = App::new(GameConfig::default());
    app.run(&mut console, Some(GameMode::Two)).await.unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert_eq!(output.matches("Invalid input. Try again.").count(), 1);
    assert_eq!(output.matches("Enter a move for Player 1").count(), 2);
    assert!(output.contains("O | 1 | 2"));
    assert!(output.contains("Game Over! You quit the game."));
    assert!(output.ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn test_menu_rejects_unknown_choice() {
    let (_, output) = run_app(GameConfig::default(), None, "5\n3\n").await;

    assert_eq!(output.matches("Welcome to Tic Tac Toe!").count(), 2);
    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn test_menu_then_replay() {
    // Two quick two-player games chosen from the menu, then leave.
    let (app, output) = run_app(
        GameConfig::default(),
        None,
        "2\n0\n1\n3\n4\n6\ny\n2\n0\n3\n1\n4\n8\n5\nn\n",
    )
    .await;

    assert_eq!(output.matches("Game Over! Player 1 wins!").count(), 1);
    assert_eq!(output.matches("Game Over! Player 2 wins!").count(), 1);
    assert!(output.contains("Score: Player 1 1, Player 2 1, ties 0"));
    assert_eq!(app.scoreboard().games(), 2);
}

#[tokio::test]
async fn test_computer_first_plays_to_a_tie() {
    let config = GameConfig::default()
        .with_computer_first(true)
        .with_seed(Some(1));
    let (app, output) = run_app(config, Some(GameMode::Single), "0\n2\n7\n3\nn\n").await;

    for index in [4, 8, 1, 6, 5] {
        assert!(
            output.contains(&format!("Computer chose position: {}", index)),
            "missing computer move {index}"
        );
    }
    assert!(output.contains("Game Over! It's a tie!"));
    assert_eq!(app.scoreboard().ties(), 1);
}

#[tokio::test]
async fn test_input_closed_mid_game_quits() {
    let (app, output) = run_app(GameConfig::default(), Some(GameMode::Two), "4\n").await;

    assert!(output.contains("Game Over! You quit the game."));
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(app.scoreboard().games(), 0);
}

#[tokio::test]
async fn test_computer_beats_scripted_player() {
    let computer = Seat::new(
        Player::new("Computer".to_string(), Mark::X, PlayerType::Computer),
        Box::new(ComputerPlayer::new("Computer", Mark::X, Strategy::Heuristic, Some(0))),
    );
    let human = Seat::new(
        Player::new("Script".to_string(), Mark::O, PlayerType::Human),
        Box::new(Scripted::new(&[
            Position::TopCenter,
            Position::Center, // taken, asked again
            Position::MiddleLeft,
            Position::TopLeft,
            Position::BottomRight,
        ])),
    );

    let mut console = Console::new(&b""[..], Vec::new());
    let mut orchestrator = Orchestrator::new(computer, human);
    let result = orchestrator.run(&mut console).await.unwrap();

    assert_eq!(
        result,
        MatchResult::Won {
            name: "Computer".to_string(),
            mark: Mark::X,
        }
    );
    assert!(orchestrator.board().is_winner(Mark::X));

    let output = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(output.matches("Invalid move. Try again.").count(), 1);
    assert!(output.contains("Computer chose position: 6"));
}

#[tokio::test]
async fn test_random_computer_finishes_games() {
    for seed in 0..5 {
        let computer = Seat::new(
            Player::new("Computer".to_string(), Mark::X, PlayerType::Computer),
            Box::new(ComputerPlayer::new("Computer", Mark::X, Strategy::Random, Some(seed))),
        );
        let other = Seat::new(
            Player::new("Heuristic".to_string(), Mark::O, PlayerType::Computer),
            Box::new(ComputerPlayer::new("Heuristic", Mark::O, Strategy::Heuristic, Some(seed))),
        );

        let mut console = Console::new(&b""[..], Vec::new());
        let mut orchestrator = Orchestrator::new(computer, other);
        let result = orchestrator.run(&mut console).await.unwrap();

        assert_ne!(result, MatchResult::Quit, "seed {seed}");
        assert!(orchestrator.board().outcome().is_over());
    }
}
