//! Board shape and domain validation

use super::grid::{Board, Cell};

impl Board {
    /// Check that the board has a 3x3 shape and every cell holds one of
    /// {Empty, PlayerOne, PlayerTwo}.
    ///
    /// The fixed-size array inside [`Board`] enforces the shape and [`Cell`]
    /// enforces the domain, so a board obtained through this crate's API
    /// always passes. The method is kept as the defensive precondition of
    /// the call contract with embedding loops; malformed external data is
    /// rejected earlier, with typed errors, by [`Board::from_string`].
    pub fn is_valid(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| matches!(cell, Cell::Empty | Cell::PlayerOne | Cell::PlayerTwo))
    }
}
