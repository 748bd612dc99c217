//! Winning line analysis

use super::grid::{Board, Coord, Mark};

/// The 8 line triples checked for a win on the 3x3 board
pub const WINNING_LINES: [[Coord; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

impl Board {
    /// Check whether any line holds three equal non-empty marks
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Get the mark owning a completed line, if any
    pub fn winner(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|line| self.line_owner(line))
    }

    /// Get the first completed line on the board, if any
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        WINNING_LINES
            .iter()
            .find(|line| self.line_owner(line).is_some())
            .copied()
    }

    fn line_owner(&self, line: &[Coord; 3]) -> Option<Mark> {
        let (row, col) = line[0];
        let mark = self.get(row, col)?.mark()?;
        line.iter()
            .all(|&(r, c)| self.get(r, c) == Some(mark.to_cell()))
            .then_some(mark)
    }
}
