//! Tic-Tac-Toe game core

pub mod board;
pub mod game;
pub mod history;
pub mod lines;
pub mod validation;

pub use board::{BOARD_SIZE, Board, Cell, GameStatus, Player, coordinates};
pub use game::{GameEngine, Move, PlayOutcome, status_of, winner_of};
pub use history::{MoveEntry, SortOrder, move_list};
pub use lines::{LineAnalyzer, WINNING_LINES, WinningLine};
pub use validation::validate_history;
