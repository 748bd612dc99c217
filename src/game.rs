//! Round state machine: turn order, move history, terminal detection

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};

/// One entry in a round's move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    pub mark: Mark,
    pub row: usize,
    pub col: usize,
}

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// One complete play-through from empty board to win or draw
///
/// The round owns the single live [`Board`] and alternates turns between
/// the two marks, starting with [`Mark::PlayerOne`]. Once a placement
/// produces a winner or fills the board, the outcome is fixed and further
/// moves are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Mark,
    moves: Vec<TurnRecord>,
    outcome: Option<GameOutcome>,
}

impl Round {
    /// Start a round with an empty board and player one to move
    pub fn new() -> Self {
        Round {
            board: Board::new(),
            to_move: Mark::PlayerOne,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Place the current player's mark at (row, col) and advance the turn
    ///
    /// When the placement ends the round, `to_move` stays on the mark that
    /// made the final move so callers can credit the winner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RoundOver`] once the round has ended, and
    /// passes placement failures (out-of-range coordinate, occupied cell)
    /// through without consuming the turn.
    pub fn play(&mut self, row: usize, col: usize) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::RoundOver);
        }

        let mark = self.to_move;
        self.board.place(mark, row, col)?;
        self.moves.push(TurnRecord { mark, row, col });

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.to_move = mark.opponent();
        }

        Ok(())
    }

    /// Get the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the mark whose turn it is
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Get the move history in play order
    pub fn moves(&self) -> &[TurnRecord] {
        &self.moves
    }

    /// Get the outcome, once the round has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check whether the round has ended in a win or draw
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
