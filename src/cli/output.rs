//! Board rendering and result banners

use std::io::Write;

use crate::board::{Board, Cell, Mark, SIZE};
use crate::game::GameOutcome;
use crate::Result;

/// Render the board as a framed grid with row and column indices
pub fn render_board<W: Write>(writer: &mut W, board: &Board) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "    0   1   2")?;
    writeln!(writer, "  +---+---+---+")?;
    for row in 0..SIZE {
        write!(writer, "{row} |")?;
        for col in 0..SIZE {
            let symbol = match board.get(row, col) {
                Some(Cell::Empty) | None => ' ',
                Some(cell) => cell.to_char(),
            };
            write!(writer, " {symbol} |")?;
        }
        writeln!(writer)?;
        writeln!(writer, "  +---+---+---+")?;
    }
    Ok(())
}

/// Print the welcome banner
pub fn print_banner<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer, "   NOUGHTS AND CROSSES")?;
    writeln!(
        writer,
        "   Two players: player 1 is '{}', player 2 is '{}'",
        Mark::PlayerOne.symbol(),
        Mark::PlayerTwo.symbol()
    )?;
    writeln!(writer, "{}", "=".repeat(40))?;
    Ok(())
}

/// Announce the round result, naming the winner or declaring a draw
pub fn print_result<W: Write>(
    writer: &mut W,
    outcome: GameOutcome,
    player_one: &str,
    player_two: &str,
) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(25))?;
    match outcome {
        GameOutcome::Win(Mark::PlayerOne) => writeln!(writer, "{player_one} wins!")?,
        GameOutcome::Win(Mark::PlayerTwo) => writeln!(writer, "{player_two} wins!")?,
        GameOutcome::Draw => writeln!(writer, "It's a draw!")?,
    }
    writeln!(writer, "{}", "=".repeat(25))?;
    Ok(())
}

/// Print the goodbye message
pub fn print_farewell<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "\nThanks for playing!")?;
    Ok(())
}
