//! Tic-Tac-Toe rules: board model, winning lines and terminal evaluation
//!
//! The free functions mirror the classic textbook interface and delegate to
//! the [`Board`] methods.

use std::collections::BTreeSet;

pub mod board;
pub mod game;
pub mod lines;
pub mod terminal;

pub use board::{Action, BOARD_SIZE, Board, CELL_COUNT, Cell, MarkCounts, Player};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use terminal::GameOutcome;

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// The player who moves next on `board`
pub fn player(board: &Board) -> Player {
    board.player()
}

/// All empty cells of `board`
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board.actions()
}

/// The board after the player to move marks `action`
pub fn result(board: &Board, action: Action) -> crate::Result<Board> {
    board.result(action)
}

/// The player owning a complete line, if any
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// True once someone has won or the board is full
pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// +1 if X has won, -1 if O has won, 0 otherwise
pub fn utility(board: &Board) -> i32 {
    board.utility()
}
