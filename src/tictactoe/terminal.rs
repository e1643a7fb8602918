//! Terminal detection and game outcome evaluation

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    lines::{LineAnalyzer, WINNING_LINES},
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Signed value from X's perspective: +1, -1 or 0
    pub fn utility(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

impl Board {
    /// Get the winner if there is one.
    ///
    /// Lines are scanned rows first, then columns, then the two diagonals,
    /// and the owner of the first complete line is returned.
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| LineAnalyzer::line_owner(self, line))
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards; a board still in play also
    /// reports 0.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(player) => GameOutcome::Win(player).utility(),
            None => 0,
        }
    }

    /// The outcome of a terminal board, `None` while the game is running
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Win(player))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
