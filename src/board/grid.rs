//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'O',
            Cell::PlayerTwo => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'O' | 'o' | '0' => Some(Cell::PlayerOne),
            'X' | 'x' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Mark::PlayerOne),
            Cell::PlayerTwo => Some(Mark::PlayerTwo),
        }
    }
}

/// The value a player places into a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::PlayerOne => Mark::PlayerTwo,
            Mark::PlayerTwo => Mark::PlayerOne,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::PlayerOne => Cell::PlayerOne,
            Mark::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// Display symbol: player one is 'O', player two is 'X'
    pub fn symbol(self) -> char {
        self.to_cell().to_char()
    }
}

/// A (row, column) pair addressing one cell, each component in 0..=2
pub type Coord = (usize, usize);

/// Number of rows and columns on the board
pub const SIZE: usize = 3;

/// The 3x3 grid of cell states representing a game position
///
/// The fixed-size array guarantees the 3x3 shape, and [`Cell`] guarantees
/// the three-valued domain. Cells transition from `Empty` to a mark via
/// [`Board::place`] and are never reversed within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new board with all cells empty
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at (row, col), or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Place a mark into an empty cell
    ///
    /// This is the single mutating operation on a board. On failure the
    /// board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] when either coordinate exceeds 2,
    /// and [`crate::Error::CellOccupied`] when the target cell already holds
    /// a mark.
    pub fn place(&mut self, mark: Mark, row: usize, col: usize) -> crate::Result<()> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::OutOfRange { row, col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(crate::Error::CellOccupied { row, col });
        }
        self.cells[row][col] = mark.to_cell();
        Ok(())
    }

    /// Check whether no cell is empty (a draw once `has_winner` is false)
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell != Cell::Empty)
    }

    /// Get all empty coordinates
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for (row, cols) in self.cells.iter().enumerate() {
            for (col, &cell) in cols.iter().enumerate() {
                if cell == Cell::Empty {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Create a board from a string representation
    ///
    /// The string must contain at least 9 non-whitespace characters, read
    /// row by row: `.` for an empty cell, `O`/`o`/`0` for player one,
    /// `X`/`x` for player two. Whitespace is filtered out, so boards may be
    /// written across multiple lines.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters remain or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(SIZE * SIZE).enumerate() {
            board.cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
