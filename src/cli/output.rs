//! Text rendering of boards, status and move lists

use std::io::Write;

use crate::tictactoe::{Board, Cell, GameEngine, SortOrder, move_list};

/// Render a board with row and column labels.
///
/// Cells on the winning line are wrapped in brackets, other cells are
/// padded with spaces.
///
/// ```text
///      1   2   3
///  1  [X] [X] [X]
///  2   O   O   .
///  3   .   .   .
/// ```
pub fn render_board(board: &Board) -> String {
    let line = board.winning_line();
    let mut out = String::from("     1   2   3\n");
    for row in 0..3 {
        out.push_str(&format!(" {}  ", row + 1));
        for col in 0..3 {
            let pos = row * 3 + col;
            let mark = board.get(pos).to_char();
            if line.is_some_and(|l| l.contains(pos)) {
                out.push_str(&format!("[{mark}]"));
            } else {
                out.push_str(&format!(" {mark} "));
            }
            if col < 2 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Write the board at the current pointer followed by the status line
pub fn write_board<W: Write>(out: &mut W, engine: &GameEngine) -> std::io::Result<()> {
    write!(out, "{}", render_board(&engine.current_board()))?;
    writeln!(out, "{}", engine.status())
}

/// Write the move list in the given order
pub fn write_move_list<W: Write>(
    out: &mut W,
    engine: &GameEngine,
    order: SortOrder,
) -> std::io::Result<()> {
    for entry in move_list(engine, order) {
        let marker = if entry.is_jump_target() { " " } else { ">" };
        writeln!(out, " {marker} {entry}")?;
    }
    Ok(())
}

/// Print a section header
pub fn write_section<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "-".repeat(title.len().max(20)))
}

/// Number of marks of each kind, used in the replay summary
pub fn mark_counts(board: &Board) -> (usize, usize) {
    board.cells.iter().fold((0, 0), |(x, o), cell| match cell {
        Cell::X => (x + 1, o),
        Cell::O => (x, o + 1),
        Cell::Empty => (x, o),
    })
}
