//! Interaction layer: prompts, rendering, and the round loop
//!
//! All routines take generic reader/writer handles so the whole session
//! can be driven from tests with in-memory buffers.

pub mod output;
pub mod prompt;

use std::io::{BufRead, Write};

use crate::board::Mark;
use crate::game::{GameOutcome, Round};
use crate::{Error, Result};

/// Session settings collected before the first round
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Name of player 1; prompted for when absent
    pub player_one: Option<String>,
    /// Name of player 2; prompted for when absent
    pub player_two: Option<String>,
}

/// Run rounds until the players decline another one
pub fn run_session<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: SessionOptions,
) -> Result<()> {
    output::print_banner(writer)?;

    let player_one = match options.player_one {
        Some(name) => name,
        None => prompt::read_player_name(
            reader,
            writer,
            &format!("Player 1 ({})", Mark::PlayerOne.symbol()),
        )?,
    };
    let player_two = match options.player_two {
        Some(name) => name,
        None => prompt::read_player_name(
            reader,
            writer,
            &format!("Player 2 ({})", Mark::PlayerTwo.symbol()),
        )?,
    };

    loop {
        play_round(reader, writer, &player_one, &player_two)?;
        if !prompt::read_yes_no(reader, writer, "\nPlay another round? (y/n): ")? {
            output::print_farewell(writer)?;
            return Ok(());
        }
    }
}

/// Play one round from empty board to win or draw
pub fn play_round<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    player_one: &str,
    player_two: &str,
) -> Result<GameOutcome> {
    let mut round = Round::new();

    while !round.is_over() {
        output::render_board(writer, round.board())?;

        let mark = round.to_move();
        let name = match mark {
            Mark::PlayerOne => player_one,
            Mark::PlayerTwo => player_two,
        };
        writeln!(writer, "Turn of {name} ({})", mark.symbol())?;

        let row = prompt::read_coordinate(reader, writer, "Enter the row (0-2): ")?;
        let col = prompt::read_coordinate(reader, writer, "Enter the column (0-2): ")?;

        match round.play(row, col) {
            Ok(()) => {}
            Err(Error::CellOccupied { .. }) => {
                writeln!(writer, "That cell is taken. Try another position.")?;
            }
            Err(e) => return Err(e),
        }
    }

    output::render_board(writer, round.board())?;

    // The loop only exits once the round has an outcome
    let outcome = round.outcome().ok_or(Error::RoundOver)?;
    output::print_result(writer, outcome, player_one, player_two)?;
    Ok(outcome)
}
