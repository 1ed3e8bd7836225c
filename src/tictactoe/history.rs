//! Move list presentation
//!
//! The move list is rebuilt from the engine on every call; sorting never
//! mutates the history it was built from.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::game::GameEngine;

/// Display order of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[value(name = "asc")]
    Ascending,
    #[value(name = "desc")]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One line of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub move_number: usize,
    /// 1-based `(row, col)` of the cell filled by this move
    pub coordinates: Option<(usize, usize)>,
    pub is_current: bool,
}

impl MoveEntry {
    /// Whether the entry is rendered as a jump target rather than a marker
    pub fn is_jump_target(&self) -> bool {
        !self.is_current || self.move_number == 0
    }
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.move_number == 0 {
            return write!(f, "Go to game start");
        }
        if self.is_current {
            write!(f, "You are at move #{}", self.move_number)?;
        } else {
            write!(f, "Go to move #{}", self.move_number)?;
        }
        if let Some((row, col)) = self.coordinates {
            write!(f, " - ({row}, {col})")?;
        }
        Ok(())
    }
}

/// Build the move list for `engine` in the requested order
pub fn move_list(engine: &GameEngine, order: SortOrder) -> Vec<MoveEntry> {
    let current = engine.current_move();
    let entries = engine
        .history()
        .iter()
        .enumerate()
        .map(|(move_number, mv)| MoveEntry {
            move_number,
            coordinates: mv.coordinates(),
            is_current: move_number == current,
        });

    match order {
        SortOrder::Ascending => entries.collect(),
        SortOrder::Descending => entries.rev().collect(),
    }
}
