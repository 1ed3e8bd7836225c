//! Session configuration shared by the CLI commands

use crate::tictactoe::SortOrder;

/// Presentation settings for a terminal session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial order of the move list
    pub order: SortOrder,

    /// Print the move list after every board
    pub show_history: bool,

    /// Print the prompt before reading a command
    pub prompt: bool,
}

impl SessionConfig {
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_history(mut self, show_history: bool) -> Self {
        self.show_history = show_history;
        self
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::Ascending,
            show_history: true,
            prompt: true,
        }
    }
}
