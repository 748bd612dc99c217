//! Test suite for the prompt-driven session loop
//! Drives complete sessions through in-memory readers and writers

use std::io::Cursor;

use noughts::cli::{run_session, SessionOptions};

fn run(input: &str, options: SessionOptions) -> String {
    let mut reader = Cursor::new(input.to_string());
    let mut output = Vec::new();
    run_session(&mut reader, &mut output, options).expect("session should complete");
    String::from_utf8(output).unwrap()
}

fn named(player_one: &str, player_two: &str) -> SessionOptions {
    SessionOptions {
        player_one: Some(player_one.to_string()),
        player_two: Some(player_two.to_string()),
    }
}

#[test]
fn full_session_with_prompted_names() {
    // Names, a top-row win for player one, then decline the replay
    let input = "Ada\nGrace\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n";
    let transcript = run(input, SessionOptions::default());

    assert!(transcript.contains("NOUGHTS AND CROSSES"));
    assert!(transcript.contains("Name of Player 1 (O):"));
    assert!(transcript.contains("Name of Player 2 (X):"));
    assert!(transcript.contains("Turn of Ada (O)"));
    assert!(transcript.contains("Turn of Grace (X)"));
    assert!(transcript.contains("Ada wins!"));
    assert!(transcript.contains("Thanks for playing!"));
}

#[test]
fn empty_names_are_rejected_until_filled() {
    let input = "\nAda\n\nGrace\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n";
    let transcript = run(input, SessionOptions::default());

    assert_eq!(transcript.matches("The name cannot be empty").count(), 2);
    assert!(transcript.contains("Ada wins!"));
}

#[test]
fn bad_coordinates_are_reprompted_without_losing_the_turn() {
    // Player one types a letter and an out-of-range row before settling on 0
    let input = "x\n5\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n";
    let transcript = run(input, named("Ada", "Grace"));

    assert!(transcript.contains("Enter a whole number"));
    assert!(transcript.contains("Coordinates must be between 0 and 2"));
    assert!(transcript.contains("Ada wins!"));
}

#[test]
fn occupied_cells_are_retried() {
    // Player two first aims at (0,0), which player one already holds
    let input = "0\n0\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n";
    let transcript = run(input, named("Ada", "Grace"));

    assert!(transcript.contains("That cell is taken"));
    assert!(transcript.contains("Ada wins!"));
}

#[test]
fn replying_yes_starts_a_fresh_round() {
    // Round 1: player one wins the top row. Round 2: same moves again,
    // proving the board was reset in between.
    let round_moves = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n";
    let input = format!("{round_moves}y\n{round_moves}n\n");
    let transcript = run(&input, named("Ada", "Grace"));

    assert_eq!(transcript.matches("Ada wins!").count(), 2);
    assert!(transcript.contains("Thanks for playing!"));
}

#[test]
fn draw_session_reports_a_draw() {
    // O X O / X X O / O O X
    let moves = "0\n0\n0\n1\n0\n2\n1\n0\n1\n2\n1\n1\n2\n0\n2\n2\n2\n1\n";
    let input = format!("{moves}n\n");
    let transcript = run(&input, named("Ada", "Grace"));

    assert!(transcript.contains("It's a draw!"));
    assert!(!transcript.contains("wins!"));
}
