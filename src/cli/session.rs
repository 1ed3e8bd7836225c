//! Interactive command loop over any reader/writer pair

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::{config::SessionConfig, output};
use crate::{
    Result,
    tictactoe::{BOARD_SIZE, GameEngine, PlayOutcome, SortOrder},
};

/// A single typed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Jump(usize),
    ToggleSort,
    History,
    Board,
    NewGame,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Cells are given either as an index `0`-`8` or as 1-based
    /// `row col` / `row,col` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCommand`] for anything unrecognized.
    pub fn parse(line: &str) -> Result<Self> {
        let lowered = line.trim().to_ascii_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            ["sort"] => Ok(Command::ToggleSort),
            ["history"] | ["h"] => Ok(Command::History),
            ["board"] | ["b"] => Ok(Command::Board),
            ["new"] => Ok(Command::NewGame),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["exit"] | ["q"] => Ok(Command::Quit),
            ["jump", n] | ["j", n] => Ok(Command::Jump(parse_number(n, line)?)),
            [cell] => Ok(Command::Play(parse_number(cell, line)?)),
            [row, col] => {
                let (row, col) = (parse_number(row, line)?, parse_number(col, line)?);
                if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
                    return Err(invalid_command(line));
                }
                Ok(Command::Play((row - 1) * 3 + (col - 1)))
            }
            _ => Err(invalid_command(line)),
        }
    }
}

fn invalid_command(line: &str) -> crate::Error {
    crate::Error::InvalidCommand {
        input: line.trim().to_string(),
    }
}

fn parse_number(word: &str, line: &str) -> Result<usize> {
    word.parse().map_err(|_| invalid_command(line))
}

const HELP: &str = "\
Commands:
  <0-8>            play a cell by index (row-major)
  <row> <col>      play a cell by 1-based coordinates, e.g. '2 3' or '2,3'
  jump <n>         go back (or forward) to move #n
  sort             toggle ascending/descending move list
  history          show the move list
  board            show the board and status
  new              start a new game
  quit             leave";

/// One interactive game session
pub struct Session {
    engine: GameEngine,
    order: SortOrder,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            order: config.order,
            config,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Execute one command, writing feedback to `out`.
    ///
    /// Returns `false` when the session should end. User mistakes such as an
    /// out-of-range jump are reported on `out` and do not end the session.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        debug!(?command, "executing command");
        match command {
            Command::Play(pos) if pos >= BOARD_SIZE => {
                writeln!(out, "Cell {pos} is off the board (use 0-8).")?;
            }
            Command::Play(pos) => match self.engine.apply_move(pos)? {
                PlayOutcome::Played { .. } => self.show(out)?,
                PlayOutcome::Occupied => writeln!(out, "Cell {pos} is already taken.")?,
                PlayOutcome::GameOver => {
                    writeln!(out, "The game is over. Jump back or start a new game.")?
                }
            },
            Command::Jump(n) => match self.engine.jump_to(n) {
                Ok(()) => self.show(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::ToggleSort => {
                self.order = self.order.toggled();
                output::write_move_list(out, &self.engine, self.order)?;
            }
            Command::History => output::write_move_list(out, &self.engine, self.order)?,
            Command::Board => output::write_board(out, &self.engine)?,
            Command::NewGame => {
                self.engine.new_game();
                self.show(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Read commands from `input` until `quit` or end of input
    ///
    /// Lines that are not valid UTF-8 are reported like any other unknown
    /// command; only read failures end the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        info!(order = ?self.order, "session started");
        output::write_board(out, &self.engine)?;
        self.prompt(out)?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(|source| crate::Error::Io {
                    operation: "read command".to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }

            let parsed = match String::from_utf8(buf.clone()) {
                Ok(line) if line.trim().is_empty() => {
                    self.prompt(out)?;
                    continue;
                }
                Ok(line) => Command::parse(&line),
                Err(err) => Err(invalid_command(&String::from_utf8_lossy(err.as_bytes()))),
            };
            let keep_going = match parsed {
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
            self.prompt(out)?;
        }

        info!(
            moves = self.engine.history().len() - 1,
            status = %self.engine.status(),
            "session ended"
        );
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        output::write_board(out, &self.engine)?;
        if self.config.show_history {
            output::write_move_list(out, &self.engine, self.order)?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.config.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!(Command::parse("4").unwrap(), Command::Play(4));
        assert_eq!(Command::parse(" 2 3 ").unwrap(), Command::Play(5));
        assert_eq!(Command::parse("3,1").unwrap(), Command::Play(6));
        assert!(Command::parse("4 4").is_err());
        assert!(Command::parse("0,1").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("JUMP 3").unwrap(), Command::Jump(3));
        assert_eq!(Command::parse("j 0").unwrap(), Command::Jump(0));
        assert_eq!(Command::parse("sort").unwrap(), Command::ToggleSort);
        assert_eq!(Command::parse("Quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("new").unwrap(), Command::NewGame);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Command::parse("castle kingside").unwrap_err();
        assert!(err.to_string().contains("castle kingside"));
        assert!(Command::parse("jump").is_err());
        assert!(Command::parse("jump x").is_err());
    }

    #[test]
    fn test_off_board_play_is_reported() {
        let mut session = Session::new(SessionConfig::default());
        let mut out = Vec::new();
        assert!(session.execute(Command::Play(12), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("off the board"));
        assert_eq!(session.engine().history().len(), 1);
    }

    #[test]
    fn test_bad_jump_keeps_session_alive() {
        let mut session = Session::new(SessionConfig::default());
        let mut out = Vec::new();
        assert!(session.execute(Command::Jump(5), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("move #5"));
        assert_eq!(session.engine().current_move(), 0);
    }

    #[test]
    fn test_toggle_sort_does_not_touch_engine() {
        let mut session = Session::new(SessionConfig::default());
        let mut out = Vec::new();
        session.execute(Command::Play(0), &mut out).unwrap();
        let before = session.engine().clone();

        session.execute(Command::ToggleSort, &mut out).unwrap();
        assert_eq!(session.order(), SortOrder::Descending);
        assert_eq!(session.engine(), &before);
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = Session::new(SessionConfig::default());
        let mut out = Vec::new();
        assert!(!session.execute(Command::Quit, &mut out).unwrap());
    }
}
