//! Agents that choose moves, and a driver that plays them against each other
//!
//! Every way of picking a move sits behind the [`Agent`] trait:
//! - exact search (minimax or alpha-beta)
//! - uniform random baseline
//! - a human typing moves on a terminal

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use log::info;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::{Algorithm, Searcher},
    tictactoe::{Action, Board, Game, Player},
};

/// Anything that can pick a move on a board
pub trait Agent {
    /// Choose an action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] on a terminal board.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Name used in logs and game reports
    fn name(&self) -> &str;
}

/// Plays the optimal move found by an exact search
pub struct SearchAgent {
    name: String,
    searcher: Box<dyn Searcher>,
}

impl SearchAgent {
    pub fn new(name: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            name: name.into(),
            searcher: algorithm.searcher(),
        }
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        self.searcher.best_action(board).ok_or(Error::GameOver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniform random baseline
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        let actions: Vec<Action> = board.actions().into_iter().collect();
        actions.choose(&mut self.rng).copied().ok_or(Error::GameOver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Source of typed lines for a [`HumanAgent`].
///
/// Lines are raw bytes; decoding happens in the agent so that input which is
/// not UTF-8 is rejected like any other unreadable move. Stdin is locked only
/// for the duration of one read, so two human agents can share one terminal.
pub trait LineInput {
    /// Append the next line, including its newline, to `buf`; `Ok(0)` means
    /// end of input
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

impl LineInput for io::Stdin {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.lock().read_until(b'\n', buf)
    }
}

impl LineInput for &[u8] {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

/// Reads moves from a line-oriented input.
///
/// Accepts `row col`, `row,col` or a single flat position `0-8`. Malformed or
/// illegal input is reported on the output and the player is asked again.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<io::Stdin, io::Stdout> {
    /// A human playing on the process's terminal
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, board: &Board) -> Result<Option<String>> {
        writeln!(self.output, "\n{board}")?;
        write!(self.output, "{} to move, enter 'row col': ", self.name)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// Parse `row col`, `row,col` or a flat position
pub fn parse_action(text: &str) -> Option<Action> {
    let parts: Vec<usize> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        &[position] => Action::from_position(position).ok(),
        &[row, col] => Some(Action::new(row, col)),
        _ => None,
    }
}

impl<R: LineInput, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        loop {
            let line = self.prompt(board)?.ok_or(Error::InputClosed)?;
            let Some(action) = parse_action(&line) else {
                writeln!(self.output, "could not read a move from '{}'", line.trim())?;
                continue;
            };
            match board.result(action) {
                Ok(_) => return Ok(action),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Agent selector used by configuration and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Human,
    Minimax,
    AlphaBeta,
    Random,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Human => "human",
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alpha-beta",
            AgentKind::Random => "random",
        }
    }

    /// Build the agent playing `player`. `seed` only affects random agents.
    pub fn build(self, player: Player, seed: Option<u64>) -> Box<dyn Agent> {
        let name = format!("{} ({player})", self.as_str());
        match self {
            AgentKind::Human => Box::new(HumanAgent::stdio(name)),
            AgentKind::Minimax => Box::new(SearchAgent::new(name, Algorithm::Minimax)),
            AgentKind::AlphaBeta => Box::new(SearchAgent::new(name, Algorithm::AlphaBeta)),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                None => Box::new(RandomAgent::new(name)),
            },
        }
    }
}

/// Play `start` to completion, X moves chosen by `x` and O moves by `o`
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent, start: Board) -> Result<Game> {
    let mut game = Game::from_board(start);

    while !game.is_over() {
        let board = game.current_state()?;
        let agent: &mut dyn Agent = match board.player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let action = agent.select_action(&board)?;
        game.play(action)?;
    }

    if let Some(outcome) = game.outcome {
        info!(
            "{} vs {}: {outcome} after {} moves",
            x.name(),
            o.name(),
            game.moves.len()
        );
    }
    Ok(game)
}
