//! History consistency checks

use super::{
    board::{Board, Cell, Player},
    game::Move,
};

fn corrupt(move_number: usize, reason: impl Into<String>) -> crate::Error {
    crate::Error::CorruptHistory {
        move_number,
        reason: reason.into(),
    }
}

/// Verify that a history could have been produced by legal play.
///
/// Checks that the first entry is the empty board with no position, that
/// each later entry fills exactly the recorded cell with the mark of the
/// player on turn, that the filled cell was empty before, and that no move
/// follows a board that already had a winner.
///
/// # Errors
///
/// Returns [`crate::Error::CorruptHistory`] describing the first violation.
pub fn validate_history(history: &[Move]) -> Result<(), crate::Error> {
    let first = history.first().ok_or_else(|| corrupt(0, "history is empty"))?;
    if first.board != Board::new() {
        return Err(corrupt(0, "first entry is not the empty board"));
    }
    if first.position.is_some() {
        return Err(corrupt(0, "first entry records a position"));
    }

    for (move_number, pair) in history.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
        let (prev, next) = (&pair[0], &pair[1]);
        let position = next
            .position
            .ok_or_else(|| corrupt(move_number, "missing position"))?;

        if position >= 9 {
            return Err(corrupt(move_number, format!("position {position} is off the board")));
        }
        if prev.board.winner().is_some() {
            return Err(corrupt(move_number, "move played after the game was won"));
        }
        if prev.board.get(position) != Cell::Empty {
            return Err(corrupt(
                move_number,
                format!("cell {position} was already occupied"),
            ));
        }

        let changed = prev.board.changed_positions(&next.board);
        if changed != [position] {
            return Err(corrupt(
                move_number,
                format!("expected only cell {position} to change, found {changed:?}"),
            ));
        }

        let player = Player::for_move_number(move_number - 1);
        if next.board.get(position) != player.to_cell() {
            return Err(corrupt(
                move_number,
                format!("cell {position} should hold {player}"),
            ));
        }
    }

    Ok(())
}
