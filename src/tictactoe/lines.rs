//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Action, Board, Cell, Player};

const fn line(cells: [(usize, usize); 3]) -> [Action; 3] {
    [
        Action::new(cells[0].0, cells[0].1),
        Action::new(cells[1].0, cells[1].1),
        Action::new(cells[2].0, cells[2].1),
    ]
}

/// Winning lines in scan order: rows, columns, main diagonal, anti-diagonal
pub const WINNING_LINES: [[Action; 3]; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]), // rows
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]), // columns
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]), // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The player holding all three cells of `line`, if any
    pub fn line_owner(board: &Board, line: &[Action; 3]) -> Option<Player> {
        let first = board.get(line[0]);
        if first != Cell::Empty && line[1..].iter().all(|&a| board.get(a) == first) {
            first.to_player()
        } else {
            None
        }
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(board, line) == Some(player))
    }

    /// Find all empty cells that would complete a line for the player
    pub fn winning_moves(board: &Board, player: Player) -> BTreeSet<Action> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(board, player, line))
            .collect()
    }

    /// Find the winning move in a specific line, if one exists
    fn winning_move_in_line(board: &Board, player: Player, line: &[Action; 3]) -> Option<Action> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &action in line {
            match board.get(action) {
                Cell::Empty => {
                    if empty.is_some() {
                        return None;
                    }
                    empty = Some(action);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent mark in line
            }
        }

        if count == 2 { empty } else { None }
    }
}
