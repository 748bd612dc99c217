//! Noughts CLI - two-player noughts and crosses over terminal prompts

use anyhow::Result;
use clap::Parser;

use noughts::cli::{self, SessionOptions};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Two-player noughts and crosses", long_about = None)]
struct Cli {
    /// Name of player 1 (plays 'O'); prompted for when omitted
    #[arg(long)]
    player_one: Option<String>,

    /// Name of player 2 (plays 'X'); prompted for when omitted
    #[arg(long)]
    player_two: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    cli::run_session(
        &mut reader,
        &mut writer,
        SessionOptions {
            player_one: args.player_one,
            player_two: args.player_two,
        },
    )?;

    Ok(())
}
