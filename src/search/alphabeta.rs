//! Minimax with alpha-beta pruning
//!
//! `alpha` is the value the maximizer (X) can already guarantee along the
//! current path and `beta` the value the minimizer (O) can guarantee. Once
//! `alpha >= beta` the remaining siblings cannot influence the decision
//! above and are skipped.
//!
//! Values returned from a pruned subtree are bounds rather than exact
//! values, but only ever on the side the caller has already ruled out.

use log::debug;

use super::{NEG_INFINITY, POS_INFINITY, SearchOutcome, SearchStats, Searcher};
use crate::tictactoe::{Action, Board, Player};

/// Minimax with alpha-beta pruning. Counts visited boards and cutoffs.
#[derive(Debug, Default)]
pub struct AlphaBetaSearch {
    stats: SearchStats,
}

impl AlphaBetaSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn max_value_ab(&mut self, board: &Board, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut v = NEG_INFINITY;
        for (_, next) in board.successors() {
            v = v.max(self.min_value_ab(&next, alpha, beta));
            alpha = alpha.max(v);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        v
    }

    pub fn min_value_ab(&mut self, board: &Board, alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut v = POS_INFINITY;
        for (_, next) in board.successors() {
            v = v.min(self.max_value_ab(&next, alpha, beta));
            beta = beta.min(v);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        v
    }

    /// Exact game value of `board` using a full window
    pub fn value(&mut self, board: &Board) -> i32 {
        match board.player() {
            Player::X => self.max_value_ab(board, NEG_INFINITY, POS_INFINITY),
            Player::O => self.min_value_ab(board, NEG_INFINITY, POS_INFINITY),
        }
    }
}

impl Searcher for AlphaBetaSearch {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&mut self, board: &Board) -> SearchOutcome {
        self.stats = SearchStats::default();
        if board.is_terminal() {
            return SearchOutcome::terminal();
        }

        let mover = board.player();
        let mut alpha = NEG_INFINITY;
        let mut beta = POS_INFINITY;
        let mut best: Option<(Action, i32)> = None;

        // The root window starts at (-inf, +inf) for either player and
        // narrows on the mover's side as better actions are found. A child
        // cut off against that bound can only report a value no better than
        // the current best, which never displaces it.
        for (action, next) in board.successors() {
            let value = match mover {
                Player::X => self.min_value_ab(&next, alpha, beta),
                Player::O => self.max_value_ab(&next, alpha, beta),
            };
            let improves = best.is_none_or(|(_, best_value)| match mover {
                Player::X => value > best_value,
                Player::O => value < best_value,
            });
            if improves {
                best = Some((action, value));
            }
            match mover {
                Player::X => alpha = alpha.max(value),
                Player::O => beta = beta.min(value),
            }
        }

        let outcome = SearchOutcome::from_best(best, self.stats);
        debug!(
            "alpha-beta: {mover} to move on {} -> {:?} (value {:?}, {} nodes, {} cutoffs)",
            board.encode(),
            outcome.action,
            outcome.value,
            outcome.stats.nodes,
            outcome.stats.cutoffs
        );
        outcome
    }
}

/// The optimal action for the player to move, `None` on a terminal board.
///
/// Returns the same action as [`minimax`](fn@super::minimax) while visiting
/// fewer boards.
pub fn alphabeta_pruning(board: &Board) -> Option<Action> {
    AlphaBetaSearch::new().best_action(board)
}

/// Value of `board` with X to move, searched inside the `(alpha, beta)` window
pub fn max_value_ab(board: &Board, alpha: i32, beta: i32) -> i32 {
    AlphaBetaSearch::new().max_value_ab(board, alpha, beta)
}

/// Value of `board` with O to move, searched inside the `(alpha, beta)` window
pub fn min_value_ab(board: &Board, alpha: i32, beta: i32) -> i32 {
    AlphaBetaSearch::new().min_value_ab(board, alpha, beta)
}
