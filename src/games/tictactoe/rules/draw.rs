//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A tie is a full board.
///
/// This does not look for a winning line: a full board can also hold one,
/// so callers decide wins first.
pub fn is_tie(board: &Board) -> bool {
    is_full(board)
}
