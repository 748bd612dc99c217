//! Line-oriented prompt helpers
//!
//! Every helper re-prompts on bad input and only fails when the input
//! stream ends or the terminal itself errors, so callers never need a
//! retry loop of their own.

use std::io::{BufRead, Write};

use crate::{Error, Result};

fn read_line<R: BufRead>(reader: &mut R, what: &str) -> Result<String> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line).map_err(|source| Error::Io {
        operation: format!("read {what}"),
        source,
    })?;
    if bytes == 0 {
        return Err(Error::UnexpectedEof {
            what: what.to_string(),
        });
    }
    Ok(line.trim().to_string())
}

/// Ask for a player name, re-prompting until it is non-empty
pub fn read_player_name<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String> {
    loop {
        write!(writer, "Name of {label}: ")?;
        writer.flush()?;
        let name = read_line(reader, "player name")?;
        if !name.is_empty() {
            return Ok(name);
        }
        writeln!(writer, "The name cannot be empty")?;
    }
}

/// Ask for a single coordinate, re-prompting until it is an integer in 0..=2
pub fn read_coordinate<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<usize> {
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        let line = read_line(reader, "coordinate")?;
        match line.parse::<i64>() {
            Ok(value) if (0..=2).contains(&value) => return Ok(value as usize),
            Ok(_) => writeln!(writer, "Coordinates must be between 0 and 2")?,
            Err(_) => writeln!(writer, "Enter a whole number")?,
        }
    }
}

/// Ask a yes/no question, accepting y/yes/n/no in any case
pub fn read_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<bool> {
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        let answer = read_line(reader, "yes or no")?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "Please answer 'y' or 'n'")?,
        }
    }
}
