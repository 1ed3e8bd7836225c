//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::{LineAnalyzer, WinningLine};

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

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
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game, identified by the mark they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The player who moves at the given move number (X on even, O on odd)
    pub fn for_move_number(move_number: usize) -> Player {
        if move_number.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Winner(Player),
    Draw,
    InProgress(Player),
}

impl GameStatus {
    /// A game is terminal once it has a winner or the board is full
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// The nine cells of a board, indexed row-major
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored, so `"XOX\n...\nO.."` and `"XOX...O.."` are the
    /// same board. No turn or piece-count validation is done here; any
    /// arrangement of cells is accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or a
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Return a copy of this board with `pos` set to the player's mark
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Player to move next, inferred from piece counts (X moves first)
    pub fn next_player(&self) -> Player {
        let x = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if x == o { Player::X } else { Player::O }
    }

    /// First winning line in scan order, if any
    pub fn winning_line(&self) -> Option<WinningLine> {
        LineAnalyzer::winner_of(&self.cells)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|line| line.player)
    }

    /// Winner, draw, or the player to move next
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            GameStatus::Winner(player)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Positions where two boards differ
    pub fn changed_positions(&self, other: &Board) -> Vec<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }

    /// Compact single-line encoding, e.g. `"XO..X...O"`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Convert a cell index into 1-based `(row, col)` coordinates
pub fn coordinates(pos: usize) -> (usize, usize) {
    (pos / 3 + 1, pos % 3 + 1)
}
