mod phases;
mod policy;
mod position;
mod rules;
mod types;

pub use phases::Outcome;
pub use policy::{Decision, Rule, Strategy, choose_move, decide};
pub use position::Position;
pub use rules::{LINES, winning_line};
pub use types::{Board, CELL_COUNT, Cell, Mark, PlaceError};
