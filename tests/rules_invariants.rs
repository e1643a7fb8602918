//! Test suite for the board model and terminal evaluation
//! Validates turn order, move legality and outcome rules

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tictactoe_search::{
    Action, Board, Cell, Error, MoveRejection, Player, actions, initial_state, player, result,
    terminal, tictactoe::WINNING_LINES, utility, winner,
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

mod board_model {
    use super::*;

    #[test]
    fn initial_state_is_empty_with_nine_actions() {
        let b = initial_state();
        assert_eq!(b.occupied_count(), 0);
        assert_eq!(player(&b), Player::X);
        assert_eq!(actions(&b).len(), 9);
    }

    #[test]
    fn player_alternates_along_random_playouts() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let mut b = initial_state();
            let mut expected = Player::X;
            while !terminal(&b) {
                assert_eq!(player(&b), expected);
                let moves: Vec<Action> = actions(&b).into_iter().collect();
                let action = *moves.choose(&mut rng).unwrap();
                b = result(&b, action).unwrap();
                expected = expected.opponent();

                let counts = b.mark_counts();
                assert!(counts.x == counts.o || counts.x == counts.o + 1);
            }
        }
    }

    #[test]
    fn result_does_not_touch_its_input() {
        let before = board("X...O....");
        let snapshot = before;
        let after = result(&before, Action::new(2, 2)).unwrap();

        assert_eq!(before, snapshot);
        let differing: Vec<Action> = (0..9)
            .map(|p| Action::from_position(p).unwrap())
            .filter(|&a| before.get(a) != after.get(a))
            .collect();
        assert_eq!(differing, vec![Action::new(2, 2)]);
        assert_eq!(after.get(Action::new(2, 2)), Cell::X);

        // The original is still usable for a different branch
        let other = result(&before, Action::new(0, 1)).unwrap();
        assert_ne!(other, after);
    }

    #[test]
    fn result_rejects_occupied_cells() {
        let b = board("X...O....");
        for action in [Action::new(0, 0), Action::new(1, 1)] {
            match result(&b, action) {
                Err(Error::InvalidMove { row, col, reason }) => {
                    assert_eq!((row, col), (action.row, action.col));
                    assert_eq!(reason, MoveRejection::Occupied);
                }
                other => panic!("expected invalid move, got {other:?}"),
            }
        }
    }

    #[test]
    fn result_rejects_out_of_range_coordinates() {
        let b = initial_state();
        let err = result(&b, Action::new(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: MoveRejection::OutOfBounds,
                ..
            }
        ));
        assert!(err.to_string().contains("(0, 3)"));
    }

    #[test]
    fn full_board_has_no_actions() {
        let b = board("XOX XOO OXX");
        assert!(actions(&b).is_empty());
    }
}

mod terminal_evaluation {
    use super::*;

    #[test]
    fn winner_found_on_every_line() {
        for line in &WINNING_LINES {
            for p in [Player::X, Player::O] {
                let b = line
                    .iter()
                    .fold(initial_state(), |b, &a| b.with_cell(a, p.to_cell()));
                assert_eq!(winner(&b), Some(p));
            }
        }
    }

    #[test]
    fn no_winner_without_three_in_a_row() {
        assert_eq!(winner(&board("XOX OXO ...")), None);
        assert_eq!(winner(&board("XOX XOO OXX")), None);
    }

    #[test]
    fn terminal_iff_winner_or_full() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut b = initial_state();
            loop {
                let full = b.actions().is_empty();
                assert_eq!(terminal(&b), winner(&b).is_some() || full);
                if terminal(&b) {
                    break;
                }
                let moves: Vec<Action> = actions(&b).into_iter().collect();
                b = result(&b, *moves.choose(&mut rng).unwrap()).unwrap();
            }
        }
    }

    #[test]
    fn utility_signs() {
        assert_eq!(utility(&board("XXX OO. ...")), 1);
        assert_eq!(utility(&board("XX. OOO X.X")), -1);
        assert_eq!(utility(&board("XOX XOO OXX")), 0);
    }
}
