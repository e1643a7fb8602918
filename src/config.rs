//! Configuration for playing games.
//!
//! A [`PlayConfig`] can be built in code, loaded from a JSON file, and then
//! overridden flag by flag from the command line.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    agents::AgentKind,
    tictactoe::{Board, Player},
};

/// Who plays each side, from which position, with which seed.
///
/// # Examples
///
/// ```
/// use tictactoe_search::{agents::AgentKind, config::PlayConfig, tictactoe::Player};
///
/// let config = PlayConfig::new()
///     .with_agent(Player::O, AgentKind::Minimax)
///     .with_seed(42);
/// assert_eq!(config.o, AgentKind::Minimax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Agent playing X
    pub x: AgentKind,
    /// Agent playing O
    pub o: AgentKind,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Starting position; the empty board when absent
    pub start: Option<String>,
}

impl PlayConfig {
    /// Alpha-beta as X against a random O from the empty board
    pub fn new() -> Self {
        Self {
            x: AgentKind::AlphaBeta,
            o: AgentKind::Random,
            seed: None,
            start: None,
        }
    }

    /// Set the agent for one side.
    pub fn with_agent(mut self, player: Player, kind: AgentKind) -> Self {
        match player {
            Player::X => self.x = kind,
            Player::O => self.o = kind,
        }
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting position.
    pub fn with_start(mut self, board: &Board) -> Self {
        self.start = Some(board.encode());
        self
    }

    /// Parse the configured starting position
    pub fn start_board(&self) -> Result<Board> {
        match &self.start {
            Some(s) => Board::from_string(s),
            None => Ok(Board::new()),
        }
    }

    /// Seed handed to the agent for `player`.
    ///
    /// O gets the next seed so two random agents do not mirror each other.
    pub fn seed_for(&self, player: Player) -> Option<u64> {
        self.seed.map(|seed| match player {
            Player::X => seed,
            Player::O => seed.wrapping_add(1),
        })
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("open config {}", path.display()), e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.start_board().map_err(|e| Error::InvalidConfiguration {
            message: format!("start position in {}: {e}", path.display()),
        })?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create config {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}
