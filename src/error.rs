//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the tic-tac-toe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move #{index} is not in the history ({len} entries recorded)")]
    InvalidHistoryIndex { index: usize, len: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("wrong board size: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("history is corrupt at move #{move_number}: {reason}")]
    CorruptHistory { move_number: usize, reason: String },

    #[error("unrecognized command '{input}' (type 'help' for a list of commands)")]
    InvalidCommand { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
