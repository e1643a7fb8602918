//! Whole-game analysis: reachable boards, search agreement and policy tables

use std::collections::{BTreeMap, HashSet, VecDeque};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    search::{AlphaBetaSearch, Algorithm, MinimaxSearch, SearchStats, Searcher},
    tictactoe::{Action, Board, Player},
};

/// Every board reachable from the empty board by legal play, including
/// terminal ones, sorted by encoding.
///
/// Play stops at terminal boards, so no board continues past a win.
pub fn reachable_boards() -> Vec<Board> {
    let root = Board::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(root);
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        if board.is_terminal() {
            continue;
        }
        for (_, next) in board.successors() {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let mut boards: Vec<Board> = visited.into_iter().collect();
    boards.sort_by_cached_key(Board::encode);
    boards
}

/// A board on which the two searches disagree on the game value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disagreement {
    pub board: String,
    pub minimax_action: Option<Action>,
    pub minimax_value: Option<i32>,
    pub alphabeta_action: Option<Action>,
    pub alphabeta_value: Option<i32>,
}

/// Summary of running both searches over a set of boards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementReport {
    /// Non-terminal boards searched
    pub boards_checked: usize,
    /// Terminal boards skipped
    pub terminal_boards: usize,
    /// Boards where both searches picked the same action
    pub identical_actions: usize,
    pub minimax: SearchStats,
    pub alphabeta: SearchStats,
    pub disagreements: Vec<Disagreement>,
}

impl AgreementReport {
    pub fn is_consistent(&self) -> bool {
        self.disagreements.is_empty()
    }
}

/// Search every non-terminal board with both algorithms and compare the
/// resulting game values.
///
/// `on_board` is called once per board visited, for progress reporting.
pub fn verify_agreement(boards: &[Board], mut on_board: impl FnMut(usize)) -> AgreementReport {
    let mut report = AgreementReport::default();
    let mut minimax = MinimaxSearch::new();
    let mut alphabeta = AlphaBetaSearch::new();

    for (i, board) in boards.iter().enumerate() {
        on_board(i + 1);
        if board.is_terminal() {
            report.terminal_boards += 1;
            continue;
        }

        let slow = minimax.search(board);
        let fast = alphabeta.search(board);
        report.boards_checked += 1;
        report.minimax += slow.stats;
        report.alphabeta += fast.stats;

        if slow.action == fast.action {
            report.identical_actions += 1;
        }
        if slow.value != fast.value {
            report.disagreements.push(Disagreement {
                board: board.encode(),
                minimax_action: slow.action,
                minimax_value: slow.value,
                alphabeta_action: fast.action,
                alphabeta_value: fast.value,
            });
        }
    }

    info!(
        "checked {} boards: {} disagreements, {} vs {} nodes",
        report.boards_checked,
        report.disagreements.len(),
        report.minimax.nodes,
        report.alphabeta.nodes
    );
    report
}

/// Optimal move for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub player: Player,
    pub action: Action,
    pub value: i32,
}

/// Optimal action and value for every non-terminal board, keyed by encoding
pub fn optimal_policy(algorithm: Algorithm, boards: &[Board]) -> BTreeMap<String, PolicyEntry> {
    let mut searcher = algorithm.searcher();
    boards
        .iter()
        .filter_map(|board| {
            let outcome = searcher.search(board);
            let entry = PolicyEntry {
                player: board.player(),
                action: outcome.action?,
                value: outcome.value?,
            };
            Some((board.encode(), entry))
        })
        .collect()
}
