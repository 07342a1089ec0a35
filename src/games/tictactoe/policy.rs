//! Move selection for the computer opponent.
//!
//! The heuristic is a fixed ladder of tactical rules, tried top-down until
//! one yields a move:
//!
//! 1. [`Rule::Center`] takes the center if it is free.
//! 2. [`Rule::Win`] completes a line for the opponent's own mark.
//! 3. [`Rule::Block`] fills the cell that would complete the human's line.
//! 4. [`Rule::Mirror`] answers the human's highest-index mark with the cell
//!    opposite it. The highest index stands in for "the last move"; no move
//!    history is consulted.
//! 5. [`Rule::Corner`] picks a free corner at random.
//! 6. [`Rule::Fallback`] picks any free cell at random.
//!
//! This is not a search and can lose. Win and block probes run on a scratch
//! copy, so the caller's board is never touched.

use super::position::Position;
use super::types::{Board, Cell, Mark};
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the computer picks its moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// The rule ladder.
    #[default]
    Heuristic,
    /// Any free cell, uniformly at random.
    Random,
}

/// The ladder rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Rule {
    /// Took the free center.
    Center,
    /// Completed the opponent's own line.
    Win,
    /// Stopped the human completing a line.
    Block,
    /// Played opposite the human's highest-index mark.
    Mirror,
    /// Random free corner.
    Corner,
    /// Random free cell.
    Fallback,
}

/// A chosen move and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Decision {
    /// Where to play.
    position: Position,
    /// Which rule picked it.
    rule: Rule,
}

/// Picks a move with the heuristic ladder.
///
/// Returns `None` only when the board has no free cell.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Position> {
    decide(board, own, human, Strategy::Heuristic, rng).map(|decision| decision.position)
}

/// Picks a move with the given strategy and reports which rule chose it.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    own: Mark,
    human: Mark,
    strategy: Strategy,
    rng: &mut R,
) -> Option<Decision> {
    let free = board.empty_positions();
    let decision = match strategy {
        Strategy::Heuristic => ladder(board, &free, own, human, rng),
        Strategy::Random => free
            .choose(rng)
            .map(|&pos| Decision::new(pos, Rule::Fallback)),
    };

    match &decision {
        Some(d) => debug!(position = d.position.to_index(), rule = %d.rule, "Opponent decided"),
        None => debug!("No free cell to play"),
    }
    decision
}

fn ladder<R: Rng + ?Sized>(
    board: &Board,
    free: &[Position],
    own: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Decision> {
    if free.is_empty() {
        return None;
    }

    if board.is_empty(Position::Center.to_index()) {
        return Some(Decision::new(Position::Center, Rule::Center));
    }

    if let Some(pos) = completing_move(board, free, own) {
        return Some(Decision::new(pos, Rule::Win));
    }

    if let Some(pos) = completing_move(board, free, human) {
        return Some(Decision::new(pos, Rule::Block));
    }

    if let Some(pos) = mirror_move(board, human) {
        return Some(Decision::new(pos, Rule::Mirror));
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| free.contains(pos))
        .collect();
    if let Some(&pos) = corners.choose(rng) {
        return Some(Decision::new(pos, Rule::Corner));
    }

    free.choose(rng)
        .map(|&pos| Decision::new(pos, Rule::Fallback))
}

/// First free cell, by ascending index, that gives `mark` three in a row.
fn completing_move(board: &Board, free: &[Position], mark: Mark) -> Option<Position> {
    free.iter().copied().find(|pos| {
        let mut probe = board.clone();
        probe.place(pos.to_index(), mark) && probe.is_winner(mark)
    })
}

/// Cell opposite the human's highest-index mark, if that cell is free.
fn mirror_move(board: &Board, human: Mark) -> Option<Position> {
    Position::ALL
        .iter()
        .rev()
        .find(|pos| board.get(pos.to_index()) == Some(Cell::Occupied(human)))
        .map(|pos| pos.opposite())
        .filter(|pos| board.is_empty(pos.to_index()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board(cells: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(i, mark) in cells {
            assert!(board.place(i, mark));
        }
        board
    }

    fn rule_for(board: &Board) -> Rule {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        *decide(board, Mark::X, Mark::O, Strategy::Heuristic, &mut rng)
            .unwrap()
            .rule()
    }

    #[test]
    fn test_win_checked_before_block() {
        // X can finish the middle row; O threatens the top row.
        let board = board(&[
            (0, Mark::O),
            (1, Mark::O),
            (3, Mark::X),
            (4, Mark::X),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let decision = decide(&board, Mark::X, Mark::O, Strategy::Heuristic, &mut rng).unwrap();
        assert_eq!(*decision.rule(), Rule::Win);
        assert_eq!(*decision.position(), Position::MiddleRight);
    }

    #[test]
    fn test_mirror_uses_highest_index_human_mark() {
        // O at 1 and 3, X at center. No lines to finish or block.
        let board = board(&[(1, Mark::O), (3, Mark::O), (4, Mark::X)]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let decision = decide(&board, Mark::X, Mark::O, Strategy::Heuristic, &mut rng).unwrap();
        assert_eq!(*decision.rule(), Rule::Mirror);
        assert_eq!(*decision.position(), Position::MiddleRight);
    }

    #[test]
    fn test_corner_when_mirror_blocked() {
        // O at 8, X at 0 and 4: opposite of 8 is taken.
        let board = board(&[(0, Mark::X), (4, Mark::X), (8, Mark::O)]);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let decision = decide(&board, Mark::X, Mark::O, Strategy::Heuristic, &mut rng).unwrap();
        assert_eq!(*decision.rule(), Rule::Corner);
        assert!(matches!(
            decision.position(),
            Position::TopRight | Position::BottomLeft
        ));
    }

    #[test]
    fn test_center_first() {
        assert_eq!(rule_for(&board(&[(0, Mark::O)])), Rule::Center);
    }

    #[test]
    fn test_full_board_has_no_move() {
        use Mark::{O, X};
        let cells: Vec<_> = [X, O, X, O, X, X, O, X, O]
            .into_iter()
            .enumerate()
            .collect();
        let full = board(&cells);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(choose_move(&full, X, O, &mut rng), None);
        assert_eq!(decide(&full, X, O, Strategy::Random, &mut rng), None);
    }

    #[test]
    fn test_strategy_parses_lowercase() {
        assert_eq!("random".parse::<Strategy>().unwrap(), Strategy::Random);
        assert_eq!(Strategy::Heuristic.to_string(), "heuristic");
    }
}
