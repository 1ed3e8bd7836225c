//! Game engine: move history, current pointer and turn order

use tracing::debug;

use super::{
    board::{BOARD_SIZE, Board, GameStatus, Player, coordinates},
    lines::WinningLine,
};

/// A snapshot in the history: the board after a play and the cell filled
///
/// The first entry of every history has `position: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: Board,
    pub position: Option<usize>,
}

impl Move {
    /// The initial empty board
    pub fn start() -> Self {
        Move {
            board: Board::new(),
            position: None,
        }
    }

    /// 1-based `(row, col)` of the filled cell, `None` for the start entry
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.position.map(coordinates)
    }
}

/// What `apply_move` did with a requested play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayOutcome {
    /// The mark was placed and the pointer advanced
    Played { player: Player, move_number: usize },
    /// The cell is already taken; nothing changed
    Occupied,
    /// The current board already has a winner; nothing changed
    GameOver,
}

impl PlayOutcome {
    pub fn is_played(self) -> bool {
        matches!(self, PlayOutcome::Played { .. })
    }
}

/// Authoritative game state for one session
///
/// Invariants: the history is never empty, its first entry is the empty
/// board, and `current` always indexes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: Vec<Move>,
    current: usize,
}

impl GameEngine {
    /// Create a new game with X to move
    pub fn new() -> Self {
        GameEngine {
            history: vec![Move::start()],
            current: 0,
        }
    }

    /// Place the current player's mark on `position`.
    ///
    /// Playing an occupied cell, or any cell once the current board has a
    /// winner, leaves the state untouched. Playing from an earlier move
    /// discards every move after it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if `position` is not 0-8.
    pub fn apply_move(&mut self, position: usize) -> Result<PlayOutcome, crate::Error> {
        if position >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { position });
        }

        let board = self.current_board();
        if !board.is_empty(position) {
            debug!(position, move_number = self.current, "ignoring move on occupied cell");
            return Ok(PlayOutcome::Occupied);
        }
        if board.winner().is_some() {
            debug!(position, move_number = self.current, "ignoring move after game end");
            return Ok(PlayOutcome::GameOver);
        }

        let player = self.current_player();
        let next = Move {
            board: board.with_mark(position, player),
            position: Some(position),
        };

        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        debug!(
            %player,
            position,
            move_number = self.current,
            discarded,
            "move applied"
        );

        Ok(PlayOutcome::Played {
            player,
            move_number: self.current,
        })
    }

    /// Move the current pointer to `move_number` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidHistoryIndex`] if `move_number` is past
    /// the last recorded move.
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), crate::Error> {
        if move_number >= self.history.len() {
            return Err(crate::Error::InvalidHistoryIndex {
                index: move_number,
                len: self.history.len(),
            });
        }
        debug!(from = self.current, to = move_number, "jumping in history");
        self.current = move_number;
        Ok(())
    }

    /// Discard the whole history and start again from the empty board
    pub fn new_game(&mut self) {
        debug!(moves = self.history.len() - 1, "starting new game");
        *self = GameEngine::new();
    }

    /// All recorded snapshots, including moves after the current pointer
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the snapshot currently being viewed and played from
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Board at the current pointer
    pub fn current_board(&self) -> Board {
        self.history[self.current].board
    }

    /// Player whose turn it is at the current pointer
    pub fn current_player(&self) -> Player {
        Player::for_move_number(self.current)
    }

    /// Status of the board at the current pointer
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match board.winner() {
            Some(player) => GameStatus::Winner(player),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress(self.current_player()),
        }
    }

    /// Completed line on the current board, for highlighting
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.current_board().winning_line()
    }

    /// Whether `apply_move(position)` would place a mark
    pub fn can_play(&self, position: usize) -> bool {
        let board = self.current_board();
        position < BOARD_SIZE && board.is_empty(position) && board.winner().is_none()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first completed line on `board`
pub fn winner_of(board: &Board) -> Option<WinningLine> {
    board.winning_line()
}

/// Winner, draw, or the player to move next on `board`
pub fn status_of(board: &Board) -> GameStatus {
    board.status()
}
