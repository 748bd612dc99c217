//! Two-player noughts and crosses played through sequential terminal prompts
//!
//! This crate provides:
//! - A 3x3 board model with placement validation and win/draw detection
//! - A round state machine tracking turn order and move history
//! - A line-oriented interaction layer for prompting and rendering

pub mod board;
pub mod cli;
pub mod error;
pub mod game;

pub use board::{Board, Cell, Coord, Mark, WINNING_LINES};
pub use error::{Error, Result};
pub use game::{GameOutcome, Round, TurnRecord};
