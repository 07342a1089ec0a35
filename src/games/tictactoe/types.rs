//! Core domain types for tic-tac-toe.

use super::phases::Outcome;
use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed by a player.
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
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Index does not name a cell.
    #[display("position {index} is off the board (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
    /// Cell already holds a mark.
    #[display("position {index} is already occupied")]
    Occupied {
        /// The rejected index.
        index: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, so index `i` sits at row `i / 3`,
/// column `i % 3`. The only way to write a cell is [`Board::place`] (or
/// [`Board::try_place`]), which refuses to overwrite a mark; a cell goes back
/// to empty only through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Places `mark` at `index`, reporting why the placement was refused.
    ///
    /// # Errors
    ///
    /// [`PlaceError::OutOfBounds`] for an index of 9 or more and
    /// [`PlaceError::Occupied`] when the cell already holds a mark. The board
    /// is untouched in both cases.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::OutOfBounds { index })?;
        if *cell != Cell::Empty {
            return Err(PlaceError::Occupied { index });
        }
        *cell = Cell::Occupied(mark);
        trace!(index, %mark, "Mark placed");
        Ok(())
    }

    /// Places `mark` at `index` if the index is on the board and the cell is empty.
    ///
    /// Returns `false` and leaves the board unchanged otherwise.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        self.try_place(index, mark).is_ok()
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` is empty. Off-board indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns a copy of the grid.
    pub fn snapshot(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// True if `mark` fills any row, column or diagonal.
    pub fn is_winner(&self, mark: Mark) -> bool {
        rules::is_winner(self, mark)
    }

    /// True if no cell is empty.
    ///
    /// A full board can still contain a winning line, so check
    /// [`Board::is_winner`] first (or use [`Board::outcome`]).
    pub fn is_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// Derives the outcome from the current cells.
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self)
    }

    /// Formats the board as text: rows joined by ` | `, separated by
    /// `---------`. Empty cells show their index.
    pub fn display(&self) -> String {
        self.cells
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        Cell::Empty => (row * 3 + col).to_string(),
                        Cell::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n---------\n")
    }
}
