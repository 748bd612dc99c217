//! Test suite for the round state machine

use noughts::{GameOutcome, Mark, Round};

mod turn_order {
    use super::*;

    #[test]
    fn player_one_always_opens_and_turns_alternate() {
        let mut round = Round::new();
        assert_eq!(round.to_move(), Mark::PlayerOne);

        round.play(1, 1).unwrap();
        assert_eq!(round.to_move(), Mark::PlayerTwo);

        round.play(0, 0).unwrap();
        assert_eq!(round.to_move(), Mark::PlayerOne);
    }

    #[test]
    fn a_rejected_move_keeps_the_turn() {
        let mut round = Round::new();
        round.play(1, 1).unwrap();

        assert!(round.play(1, 1).is_err(), "occupied cell");
        assert!(round.play(9, 9).is_err(), "out of range");
        assert_eq!(round.to_move(), Mark::PlayerTwo);
        assert_eq!(round.moves().len(), 1);
    }
}

mod terminal_states {
    use super::*;

    #[test]
    fn a_win_is_credited_to_the_mark_that_moved_last() {
        let mut round = Round::new();
        // PlayerTwo takes the left column
        round.play(0, 1).unwrap(); // O
        round.play(0, 0).unwrap(); // X
        round.play(0, 2).unwrap(); // O
        round.play(1, 0).unwrap(); // X
        round.play(2, 2).unwrap(); // O
        round.play(2, 0).unwrap(); // X completes the column

        assert_eq!(round.outcome(), Some(GameOutcome::Win(Mark::PlayerTwo)));
        assert!(round.is_over());
    }

    #[test]
    fn no_moves_are_accepted_after_the_round_ends() {
        let mut round = Round::new();
        round.play(0, 0).unwrap();
        round.play(1, 0).unwrap();
        round.play(0, 1).unwrap();
        round.play(1, 1).unwrap();
        round.play(0, 2).unwrap();
        assert!(round.is_over());

        assert!(round.play(2, 2).is_err());
        assert_eq!(round.moves().len(), 5);
    }

    #[test]
    fn a_filled_board_with_no_line_is_a_draw() {
        let mut round = Round::new();
        // O X O / X X O / O O X
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 2),
            (2, 1),
        ] {
            round.play(row, col).unwrap();
        }

        assert_eq!(round.outcome(), Some(GameOutcome::Draw));
        assert!(round.board().is_full());
        assert!(!round.board().has_winner());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn a_round_in_progress_round_trips_through_json() {
        let mut round = Round::new();
        round.play(1, 1).unwrap();
        round.play(0, 0).unwrap();

        let json = serde_json::to_string(&round).unwrap();
        let back: Round = serde_json::from_str(&json).unwrap();

        assert_eq!(back.board(), round.board());
        assert_eq!(back.to_move(), round.to_move());
        assert_eq!(back.moves(), round.moves());
        assert_eq!(back.outcome(), round.outcome());
    }
}
