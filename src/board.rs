//! Board model: cell state, placement validation, win and draw detection

pub mod grid;
pub mod lines;
pub mod validation;

pub use grid::{Board, Cell, Coord, Mark, SIZE};
pub use lines::WINNING_LINES;
