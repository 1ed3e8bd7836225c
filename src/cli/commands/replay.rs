//! Replay command - Apply a scripted sequence of moves and report the result

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use crate::{
    cli::output,
    tictactoe::{GameEngine, GameStatus, MoveEntry, PlayOutcome, SortOrder, move_list},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a sequence of cells and print the resulting game")]
pub struct ReplayArgs {
    /// Cells to play in order (0-8, row-major)
    #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
    pub cells: Vec<u8>,

    /// Jump to this move number after replaying
    #[arg(long, short = 'j')]
    pub jump: Option<usize>,

    /// Order of the printed move list
    #[arg(long, value_enum, default_value = "asc")]
    pub order: SortOrder,

    /// Print a JSON snapshot instead of text
    #[arg(long)]
    pub json: bool,
}

/// Serializable view of an engine, for `--json`
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub current_move: usize,
    pub status: GameStatus,
    pub winning_line: Option<[usize; 3]>,
    pub board: String,
    pub history: Vec<SnapshotMove>,
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotMove {
    pub board: String,
    pub position: Option<usize>,
}

impl Snapshot {
    pub fn new(engine: &GameEngine, order: SortOrder) -> Self {
        Snapshot {
            current_move: engine.current_move(),
            status: engine.status(),
            winning_line: engine.winning_line().map(|line| line.cells),
            board: engine.current_board().encode(),
            history: engine
                .history()
                .iter()
                .map(|mv| SnapshotMove {
                    board: mv.board.encode(),
                    position: mv.position,
                })
                .collect(),
            moves: move_list(engine, order),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Apply `cells` to a fresh engine, returning it with the cells that were ignored
pub fn replay(cells: &[u8]) -> crate::Result<(GameEngine, Vec<usize>)> {
    let mut engine = GameEngine::new();
    let mut ignored = Vec::new();
    for &cell in cells {
        let pos = usize::from(cell);
        if let outcome @ (PlayOutcome::Occupied | PlayOutcome::GameOver) = engine.apply_move(pos)? {
            warn!(position = pos, ?outcome, "move ignored during replay");
            ignored.push(pos);
        }
    }
    Ok((engine, ignored))
}

/// Replay `cells`, then move the pointer to `jump` if given
pub fn replay_and_jump(cells: &[u8], jump: Option<usize>) -> Result<(GameEngine, Vec<usize>)> {
    let (mut engine, ignored) = replay(cells).context("failed to replay the given moves")?;
    if let Some(n) = jump {
        engine
            .jump_to(n)
            .with_context(|| format!("failed to jump to move #{n} after replaying"))?;
    }
    Ok((engine, ignored))
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let (engine, ignored) = replay_and_jump(&args.cells, args.jump)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let snapshot = Snapshot::new(&engine, args.order);
        writeln!(out, "{}", snapshot.to_json()?)?;
        return Ok(());
    }

    if !ignored.is_empty() {
        writeln!(out, "Ignored moves: {ignored:?}")?;
    }
    output::write_board(&mut out, &engine)?;
    let (x, o) = output::mark_counts(&engine.current_board());
    writeln!(out, "Move #{} (X: {x}, O: {o})", engine.current_move())?;
    output::write_section(&mut out, "History")?;
    output::write_move_list(&mut out, &engine, args.order)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_replay_reports_ignored_moves() {
        let (engine, ignored) = replay(&[0, 0, 3, 1, 4, 2, 8]).unwrap();
        // second 0 is occupied, 8 comes after X completed the top row
        assert_eq!(ignored, vec![0, 8]);
        assert_eq!(engine.status(), GameStatus::Winner(Player::X));
    }

    #[test]
    fn test_replay_with_jump() {
        let (engine, _) = replay_and_jump(&[4, 0, 8], Some(1)).unwrap();
        assert_eq!(engine.current_move(), 1);
        assert_eq!(engine.history().len(), 4);
    }

    #[test]
    fn test_replay_bad_jump_fails() {
        let err = replay_and_jump(&[4], Some(3)).unwrap_err();
        assert_eq!(err.to_string(), "failed to jump to move #3 after replaying");
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::InvalidHistoryIndex { index: 3, len: 2 })
        ));
    }

    #[test]
    fn test_snapshot_serializes() {
        let (engine, _) = replay(&[0, 3, 1, 4, 2]).unwrap();
        let snapshot = Snapshot::new(&engine, SortOrder::Ascending);
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(json["current_move"], 5);
        assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["board"], "XXXOO....");
        assert_eq!(json["history"][0]["position"], serde_json::Value::Null);
        assert_eq!(json["moves"].as_array().unwrap().len(), 6);
    }
}
