//! Board state representation and move generation

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{Error, MoveRejection};

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target: the cell at `(row, col)`.
///
/// Ordering is row-major, so any ordered collection of actions enumerates
/// them top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Build an action from a flat position (0-8, row-major)
    pub fn from_position(position: usize) -> Result<Self, Error> {
        if position >= CELL_COUNT {
            return Err(Error::InvalidPosition { position });
        }
        Ok(Action::new(position / BOARD_SIZE, position % BOARD_SIZE))
    }

    /// Flat row-major position of this action
    pub fn position(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    pub x: usize,
    pub o: usize,
}

impl MarkCounts {
    /// Cells still holding no mark
    pub fn empty(&self) -> usize {
        CELL_COUNT - self.x - self.o
    }
}

/// A snapshot of the 3x3 grid.
///
/// `Board` is `Copy`: every transition returns a new value and the board it
/// was derived from stays usable. The player to move is never stored; it is
/// always derived from the mark counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell targeted by an in-bounds action
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row][action.col]
    }

    /// Return a copy with one cell overwritten, bypassing turn order.
    ///
    /// Meant for building fixtures; use [`Board::result`] to play moves.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row][action.col] = cell;
        self
    }

    fn iter_cells(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (Action::new(row, col), cell))
        })
    }

    pub fn mark_counts(&self) -> MarkCounts {
        let mut counts = MarkCounts::default();
        for (_, cell) in self.iter_cells() {
            match cell {
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let counts = self.mark_counts();
        counts.x + counts.o
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        self.mark_counts().empty() == 0
    }

    /// The player whose turn it is: X on equal counts, O otherwise
    pub fn player(&self) -> Player {
        let counts = self.mark_counts();
        if counts.x == counts.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order
    pub fn actions(&self) -> BTreeSet<Action> {
        self.iter_cells()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(action, _)| action)
            .collect()
    }

    /// Play `action` for the player to move and return the new board
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, Error> {
        let reject = |reason| Error::InvalidMove {
            row: action.row,
            col: action.col,
            reason,
        };

        if !action.in_bounds() {
            return Err(reject(MoveRejection::OutOfBounds));
        }
        if self.get(action) != Cell::Empty {
            return Err(reject(MoveRejection::Occupied));
        }

        Ok(self.place(action))
    }

    /// Each legal action paired with the board it produces.
    ///
    /// Only empty cells are visited, so no move here can be rejected.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + use<> {
        let board = *self;
        self.actions()
            .into_iter()
            .map(move |action| (action, board.place(action)))
    }

    fn place(&self, action: Action) -> Board {
        let mut next = *self;
        next.cells[action.row][action.col] = self.player().to_cell();
        next
    }

    /// Parse a board from 9 cell characters.
    ///
    /// Whitespace and the row separators `/` and `|` are ignored, so
    /// `"XO./.X./..O"` and `"XO. .X. ..O"` both parse.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The mark counts could not arise with X moving first
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }

        let counts = board.mark_counts();
        if counts.x != counts.o && counts.x != counts.o + 1 {
            return Err(Error::InvalidMarkCounts {
                x_count: counts.x,
                o_count: counts.o,
            });
        }

        Ok(board)
    }

    /// Compact 9-character encoding, row-major, `.` for empty
    pub fn encode(&self) -> String {
        self.iter_cells().map(|(_, cell)| cell.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            for cell in line {
                write!(f, "{}", cell.to_char())?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
