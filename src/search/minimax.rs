//! Plain minimax over the full game tree

use log::debug;

use super::{NEG_INFINITY, POS_INFINITY, SearchOutcome, SearchStats, Searcher};
use crate::tictactoe::{Action, Board, Player};

/// Exhaustive minimax search. X maximizes, O minimizes.
#[derive(Debug, Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
}

impl MinimaxSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since the last root search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of `board` when X is to move
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut v = NEG_INFINITY;
        for (_, next) in board.successors() {
            v = v.max(self.min_value(&next));
        }
        v
    }

    /// Value of `board` when O is to move
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut v = POS_INFINITY;
        for (_, next) in board.successors() {
            v = v.min(self.max_value(&next));
        }
        v
    }

    /// Game value of `board` under optimal play by both sides
    pub fn value(&mut self, board: &Board) -> i32 {
        match board.player() {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }
}

impl Searcher for MinimaxSearch {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&mut self, board: &Board) -> SearchOutcome {
        self.stats = SearchStats::default();
        if board.is_terminal() {
            return SearchOutcome::terminal();
        }

        let mover = board.player();
        let mut best: Option<(Action, i32)> = None;

        for (action, next) in board.successors() {
            let value = match mover {
                Player::X => self.min_value(&next),
                Player::O => self.max_value(&next),
            };
            // First action reaching the best value wins ties
            let improves = match best {
                None => true,
                Some((_, best_value)) => match mover {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }

        let outcome = SearchOutcome::from_best(best, self.stats);
        debug!(
            "minimax: {mover} to move on {} -> {:?} (value {:?}, {} nodes)",
            board.encode(),
            outcome.action,
            outcome.value,
            outcome.stats.nodes
        );
        outcome
    }
}

/// The optimal action for the player to move, `None` on a terminal board
pub fn minimax(board: &Board) -> Option<Action> {
    MinimaxSearch::new().best_action(board)
}

/// Minimax value of `board` with X to move
pub fn max_value(board: &Board) -> i32 {
    MinimaxSearch::new().max_value(board)
}

/// Minimax value of `board` with O to move
pub fn min_value(board: &Board) -> i32 {
    MinimaxSearch::new().min_value(board)
}

/// Game value of `board` (its utility when terminal)
pub fn minimax_value(board: &Board) -> i32 {
    MinimaxSearch::new().value(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_action() {
        assert_eq!(minimax(&board("XXX OO. ...")), None);
        assert_eq!(minimax(&board("XOX XOO OXX")), None);
    }

    #[test]
    fn test_values_on_terminal_boards() {
        assert_eq!(max_value(&board("XXX OO. ...")), 1);
        assert_eq!(min_value(&board("XXX OO. ...")), 1);
        assert_eq!(minimax_value(&board("XOX XOO OXX")), 0);
    }

    #[test]
    fn test_single_remaining_move() {
        // XOX
        // XOO
        // OX.
        let b = board("XOX XOO OX.");
        assert_eq!(minimax(&b), Some(Action::new(2, 2)));
    }

    #[test]
    fn test_x_takes_win_in_one() {
        // XOX
        // .XO
        // O..
        let b = board("XOX .XO O..");
        assert_eq!(b.player(), Player::X);
        assert_eq!(minimax(&b), Some(Action::new(2, 2)));
    }

    #[test]
    fn test_o_takes_win_in_one() {
        // XX.
        // OO.
        // X..
        let b = board("XX. OO. X..");
        assert_eq!(b.player(), Player::O);
        assert_eq!(minimax(&b), Some(Action::new(1, 2)));
        assert_eq!(minimax_value(&b), -1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut search = MinimaxSearch::new();
        let outcome = search.search(&Board::new());

        assert_eq!(outcome.value, Some(0));
        // Row-major enumeration keeps the first drawing move
        assert_eq!(outcome.action, Some(Action::new(0, 0)));
        assert_eq!(outcome.stats.nodes, 549_945);
        assert_eq!(outcome.stats.cutoffs, 0);
        assert_eq!(search.stats(), outcome.stats);
    }
}
