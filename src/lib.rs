//! Tic-tac-toe game core with move history navigation
//!
//! This crate provides:
//! - The game engine: board history, current move pointer and turn order
//! - Win and draw detection over the eight fixed lines
//! - A move list view with ascending/descending ordering
//! - A terminal front end driving the engine
//!
//! # Example
//!
//! ```
//! use tictactoe_history::tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     engine.apply_move(cell).unwrap();
//! }
//! assert_eq!(engine.status(), GameStatus::Winner(Player::X));
//! assert_eq!(engine.winning_line().unwrap().cells, [0, 1, 2]);
//!
//! engine.jump_to(0).unwrap();
//! assert_eq!(engine.status(), GameStatus::InProgress(Player::X));
//! ```

pub mod cli;
pub mod error;
pub mod tictactoe;

pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, GameEngine, GameStatus, Move, PlayOutcome, Player, WinningLine};
