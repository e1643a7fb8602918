//! Exact game-tree search for Tic-Tac-Toe
//!
//! This crate provides:
//! - Board model with derived turn order and immutable successors
//! - Terminal detection and signed utilities from X's perspective
//! - Plain minimax and alpha-beta pruning searches
//! - Agents, a game driver and whole-game analysis built on the searches
//!
//! ```
//! use tictactoe_search::{alphabeta_pruning, initial_state, minimax, result};
//!
//! let board = initial_state();
//! let action = minimax(&board).unwrap();
//! assert_eq!(alphabeta_pruning(&board), Some(action));
//!
//! let next = result(&board, action).unwrap();
//! assert!(result(&next, action).is_err());
//! ```

pub mod agents;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, MoveRejection, Result};
pub use search::{Algorithm, SearchOutcome, SearchStats, Searcher, alphabeta_pruning, minimax};
pub use tictactoe::{
    Action, Board, Cell, GameOutcome, Player, actions, initial_state, player, result, terminal,
    utility, winner,
};
