//! Optimality and equivalence checks for the exact searches

use tictactoe_search::{
    Action, Board, GameOutcome, Player, alphabeta_pruning, minimax,
    agents::{Agent, RandomAgent, SearchAgent, play_game},
    analysis::reachable_boards,
    search::{AlphaBetaSearch, Algorithm, MinimaxSearch, Searcher, minimax_value},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

/// Value of the board reached by playing `action`
fn value_after(b: &Board, action: Action) -> i32 {
    minimax_value(&b.result(action).unwrap())
}

mod scenarios {
    use super::*;

    #[test]
    fn finds_win_in_one() {
        // XOX
        // .XO
        // O..
        let b = board("XOX .XO O..");
        assert_eq!(b.player(), Player::X);
        assert_eq!(minimax(&b), Some(Action::new(2, 2)));
        assert_eq!(alphabeta_pruning(&b), Some(Action::new(2, 2)));
    }

    #[test]
    fn picks_the_only_move_that_avoids_defeat() {
        // X.O
        // .X.
        // ...
        // Every O reply except the corner lets X complete the diagonal.
        let b = board("X.O .X. ...");
        assert_eq!(b.player(), Player::O);

        for action in b.actions() {
            let expected = if action == Action::new(2, 2) { 0 } else { 1 };
            assert_eq!(value_after(&b, action), expected, "{action}");
        }
        assert_eq!(minimax(&b), Some(Action::new(2, 2)));
        assert_eq!(alphabeta_pruning(&b), Some(Action::new(2, 2)));
    }

    #[test]
    fn answers_corner_opening_with_centre() {
        let b = board("X.. ... ...");
        assert_eq!(minimax(&b), Some(Action::new(1, 1)));
        assert_eq!(alphabeta_pruning(&b), Some(Action::new(1, 1)));
    }

    #[test]
    fn answers_centre_opening_with_corner() {
        let b = board("... .X. ...");
        let reply = alphabeta_pruning(&b).unwrap();
        assert!(
            [(0, 0), (0, 2), (2, 0), (2, 2)].contains(&(reply.row, reply.col)),
            "{reply}"
        );
        assert_eq!(value_after(&b, reply), 0);
        assert_eq!(minimax(&b), Some(reply));
    }

    #[test]
    fn returns_none_on_terminal_boards() {
        for s in ["XXX OO. ...", "XX. OOO X.X", "XOX XOO OXX"] {
            let b = board(s);
            assert_eq!(minimax(&b), None, "{s}");
            assert_eq!(alphabeta_pruning(&b), None, "{s}");
        }
    }

    #[test]
    fn empty_board_move_is_legal_and_drawing() {
        let b = Board::new();
        let action = minimax(&b).unwrap();
        assert!(action.in_bounds());
        assert_eq!(value_after(&b, action), 0);
    }
}

mod equivalence {
    use super::*;

    #[test]
    fn both_searches_agree_on_every_reachable_board() {
        let mut slow = MinimaxSearch::new();
        let mut fast = AlphaBetaSearch::new();
        let mut checked = 0;

        for b in reachable_boards() {
            let expected = slow.search(&b);
            let actual = fast.search(&b);
            if b.is_terminal() {
                assert_eq!(expected.action, None);
                assert_eq!(actual.action, None);
                continue;
            }

            assert_eq!(actual.value, expected.value, "value on {}", b.encode());
            assert_eq!(actual.action, expected.action, "action on {}", b.encode());
            assert!(actual.stats.nodes <= expected.stats.nodes);

            let action = actual.action.unwrap();
            assert_eq!(Some(value_after(&b, action)), expected.value);
            checked += 1;
        }

        assert_eq!(checked, 4520);
    }

    #[test]
    fn pruning_visits_fewer_boards_from_the_start() {
        let mut slow = MinimaxSearch::new();
        let mut fast = AlphaBetaSearch::new();
        let expected = slow.search(&Board::new());
        let actual = fast.search(&Board::new());

        assert_eq!(expected.stats.nodes, 549_945);
        assert!(actual.stats.nodes < expected.stats.nodes / 10);
        assert!(actual.stats.cutoffs > 0);
    }
}

mod self_play {
    use super::*;

    #[test]
    fn optimal_play_from_the_start_is_a_draw() {
        for (xa, oa) in [
            (Algorithm::Minimax, Algorithm::Minimax),
            (Algorithm::AlphaBeta, Algorithm::AlphaBeta),
            (Algorithm::Minimax, Algorithm::AlphaBeta),
        ] {
            let mut x = SearchAgent::new("x", xa);
            let mut o = SearchAgent::new("o", oa);
            let game = play_game(&mut x, &mut o, Board::new()).unwrap();
            assert_eq!(game.outcome, Some(GameOutcome::Draw));
            assert_eq!(game.current_state().unwrap().utility(), 0);
        }
    }

    #[test]
    fn optimal_agent_never_loses_to_random() {
        for seed in 0..25 {
            let mut x = SearchAgent::new("x", Algorithm::AlphaBeta);
            let mut o = RandomAgent::with_seed("o", seed);
            let game = play_game(&mut x, &mut o, Board::new()).unwrap();
            assert_ne!(game.outcome, Some(GameOutcome::Win(Player::O)), "seed {seed}");

            let mut x = RandomAgent::with_seed("x", seed);
            let mut o = SearchAgent::new("o", Algorithm::AlphaBeta);
            let game = play_game(&mut x, &mut o, Board::new()).unwrap();
            assert_ne!(game.outcome, Some(GameOutcome::Win(Player::X)), "seed {seed}");
        }
    }

    #[test]
    fn search_agent_converts_a_won_position() {
        // X.O
        // .O.
        // ..X
        // X must block at (2, 0), which forks (1, 0) and (2, 1).
        let start = board("X.O .O. ..X");
        assert_eq!(start.player(), Player::X);
        assert_eq!(minimax_value(&start), 1);

        let mut x = SearchAgent::new("x", Algorithm::Minimax);
        let mut o = SearchAgent::new("o", Algorithm::AlphaBeta);
        let game = play_game(&mut x, &mut o, start).unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves[0].action, Action::new(2, 0));
        assert_eq!(x.name(), "x");
    }
}
