//! Exact game-tree search
//!
//! Two interchangeable searchers select the optimal action for the player to
//! move:
//! - [`MinimaxSearch`] explores every line of play
//! - [`AlphaBetaSearch`] prunes branches that cannot change the decision
//!
//! Both enumerate actions row-major and keep the first action reaching the
//! best value, so they agree on the returned action, not just its value.

use std::{fmt, ops::AddAssign};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Action, Board};

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{AlphaBetaSearch, alphabeta_pruning, max_value_ab, min_value_ab};
pub use minimax::{MinimaxSearch, max_value, min_value, minimax, minimax_value};

/// Lower bound standing in for -infinity. Utilities never reach it.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper bound standing in for +infinity.
pub const POS_INFINITY: i32 = i32::MAX;

/// Search algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        }
    }

    /// Build a fresh searcher for this algorithm
    pub fn searcher(self) -> Box<dyn Searcher> {
        match self {
            Algorithm::Minimax => Box::new(MinimaxSearch::new()),
            Algorithm::AlphaBeta => Box::new(AlphaBetaSearch::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work counters for one root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated below the root
    pub nodes: u64,
    /// Loops abandoned early by an alpha-beta cutoff
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Optimal action, `None` when the board is terminal
    pub action: Option<Action>,
    /// Game value reached by `action`
    pub value: Option<i32>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub(crate) fn terminal() -> Self {
        SearchOutcome {
            action: None,
            value: None,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn from_best(best: Option<(Action, i32)>, stats: SearchStats) -> Self {
        SearchOutcome {
            action: best.map(|(action, _)| action),
            value: best.map(|(_, value)| value),
            stats,
        }
    }
}

/// Common interface of the exact searchers
pub trait Searcher {
    fn name(&self) -> &'static str;

    /// Search from `board` and report the chosen action with its value.
    ///
    /// Statistics are reset at the start of every call.
    fn search(&mut self, board: &Board) -> SearchOutcome;

    /// The optimal action, `None` on a terminal board
    fn best_action(&mut self, board: &Board) -> Option<Action> {
        self.search(board).action
    }
}

/// Run a single root search with the given algorithm
pub fn search_with(algorithm: Algorithm, board: &Board) -> SearchOutcome {
    algorithm.searcher().search(board)
}
