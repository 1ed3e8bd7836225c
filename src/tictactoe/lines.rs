//! Winning line analysis for Tic-Tac-Toe

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A completed line: the player who owns it and its three cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    /// Whether `pos` is one of the three cells of this line
    pub fn contains(&self, pos: usize) -> bool {
        self.cells.contains(&pos)
    }
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the first completed line, scanning rows top to bottom, then
    /// columns left to right, then the two diagonals.
    ///
    /// Boards with several completed lines report the earliest one in that
    /// order, whatever their marks.
    pub fn winner_of(cells: &[Cell; 9]) -> Option<WinningLine> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let player = cells[a].to_player()?;
            (cells[a] == cells[b] && cells[b] == cells[c]).then_some(WinningLine {
                player,
                cells: line,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(positions: &[usize], cell: Cell) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &pos in positions {
            cells[pos] = cell;
        }
        cells
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let cells = cells_with(&line, player.to_cell());
                let found = LineAnalyzer::winner_of(&cells).unwrap();
                assert_eq!(found.player, player);
                assert_eq!(found.cells, line);
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winner_of(&cells), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = cells_with(&[0, 1], Cell::X);
        cells[2] = Cell::O;
        assert_eq!(LineAnalyzer::winner_of(&cells), None);
    }

    #[test]
    fn test_rows_are_reported_before_columns() {
        // XXX
        // X..
        // X..
        let cells = cells_with(&[0, 1, 2, 3, 6], Cell::X);
        let found = LineAnalyzer::winner_of(&cells).unwrap();
        assert_eq!(found.cells, [0, 1, 2]);
    }

    #[test]
    fn test_columns_are_reported_before_diagonals() {
        // X..
        // XX.
        // X.X
        let cells = cells_with(&[0, 3, 4, 6, 8], Cell::X);
        let found = LineAnalyzer::winner_of(&cells).unwrap();
        assert_eq!(found.cells, [0, 3, 6]);
    }

    #[test]
    fn test_main_diagonal_before_anti_diagonal() {
        let cells = cells_with(&[0, 2, 4, 6, 8], Cell::O);
        let found = LineAnalyzer::winner_of(&cells).unwrap();
        assert_eq!(found.cells, [0, 4, 8]);
    }

    #[test]
    fn test_earliest_line_wins_regardless_of_mark() {
        // OOO on the bottom row, XXX in the middle row
        let mut cells = cells_with(&[6, 7, 8], Cell::O);
        cells[3] = Cell::X;
        cells[4] = Cell::X;
        cells[5] = Cell::X;
        let found = LineAnalyzer::winner_of(&cells).unwrap();
        assert_eq!(found.player, Player::X);
        assert_eq!(found.cells, [3, 4, 5]);
    }

    #[test]
    fn test_winning_line_contains() {
        let line = WinningLine {
            player: Player::X,
            cells: [2, 4, 6],
        };
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }
}
