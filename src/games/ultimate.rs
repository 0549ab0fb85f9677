//! Ultimate: a 3×3 meta-board of 3×3 sub-boards.

use super::{EMPTY, opponent};
use crate::framework::lines::has_run;
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::{ConsolePlay, UiSettings};
use std::fmt::Write as _;
use tracing::{debug, instrument};

/// Meta mark of a sub-board filled without a winner.
pub const DRAW_MARK: char = 'D';

const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 9×9 board plus a 3×3 meta-board of sub-board results.
///
/// Coordinates are global (`0..9`). A decided sub-board takes no more
/// marks. Sub-board completions only update the meta-board; the match is
/// decided by lines on the meta-board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltimateBoard {
    grid: Grid<char>,
    meta: Grid<char>,
}

impl UltimateBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(9, 9, EMPTY),
            meta: Grid::new(3, 3, EMPTY),
        }
    }

    /// Sub-board results: a player's symbol, [`DRAW_MARK`], or empty.
    pub fn meta(&self) -> &Grid<char> {
        &self.meta
    }

    fn sub_board_winner(&self, br: usize, bc: usize) -> Option<char> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line.map(|(r, col)| self.grid.get(br * 3 + r, bc * 3 + col));
            match a {
                Some(s) if s != EMPTY && a == b && b == c => Some(s),
                _ => None,
            }
        })
    }

    fn sub_board_full(&self, br: usize, bc: usize) -> bool {
        (0..3).all(|r| (0..3).all(|c| !self.grid.is_empty_at(br * 3 + r, bc * 3 + c)))
    }

    fn meta_line(&self, symbol: char) -> bool {
        symbol != DRAW_MARK && has_run(&self.meta, symbol, 3)
    }
}

impl Default for UltimateBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for UltimateBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        if mv.is_erase() || mv.symbol() == DRAW_MARK || !self.is_playable(mv.row(), mv.col()) {
            return false;
        }
        if !self.grid.place(mv.row(), mv.col(), mv.symbol()) {
            return false;
        }
        let (br, bc) = (mv.row() / 3, mv.col() / 3);
        if let Some(winner) = self.sub_board_winner(br, bc) {
            self.meta.place(br, bc, winner);
            debug!(br, bc, %winner, "Sub-board won");
        } else if self.sub_board_full(br, bc) {
            self.meta.place(br, bc, DRAW_MARK);
            debug!(br, bc, "Sub-board drawn");
        }
        true
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        self.meta_line(player.symbol())
    }

    fn is_lose(&self, player: &Player<char>) -> bool {
        self.meta_line(opponent(Self::symbols(), player.symbol()))
    }

    fn is_draw(&self, _player: &Player<char>) -> bool {
        self.meta.is_full() && Self::symbols().iter().all(|&s| !self.meta_line(s))
    }

    fn is_playable(&self, row: usize, col: usize) -> bool {
        self.grid.is_empty_at(row, col) && self.meta.is_empty_at(row / 3, col / 3)
    }
}

impl ConsolePlay for UltimateBoard {
    const TITLE: &'static str = "Ultimate Tic-Tac-Toe";
    const CELL_WIDTH: usize = 1;

    /// Separates sub-boards with double rules.
    fn render(matrix: &[Vec<char>], _settings: &UiSettings) -> String {
        let mut out = String::from("\n    ");
        let columns = matrix.first().map_or(0, Vec::len);
        for c in 0..columns {
            let _ = write!(out, "{}{}", c, if c % 3 == 2 { "   " } else { " " });
        }
        out.push('\n');
        for (r, row) in matrix.iter().enumerate() {
            if r % 3 == 0 {
                out.push_str("   +=======+=======+=======+\n");
            }
            let _ = write!(out, "{:>2} |", r);
            for (c, cell) in row.iter().enumerate() {
                let _ = write!(out, " {}", cell);
                if c % 3 == 2 {
                    out.push_str(" |");
                }
            }
            out.push('\n');
        }
        out.push_str("   +=======+=======+=======+\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decided_sub_board_is_closed() {
        let mut board = UltimateBoard::new();
        for c in 0..3 {
            assert!(board.update_board(&Move::new(0, c, 'X')));
        }
        assert_eq!(board.meta().get(0, 0), Some('X'));
        assert!(!board.update_board(&Move::new(1, 1, 'O')));
        assert!(!board.is_playable(2, 2));
    }

    #[test]
    fn test_full_sub_board_is_drawn() {
        let mut board = UltimateBoard::new();
        let layout = ["XOX", "XOO", "OXX"];
        for (r, row) in layout.iter().enumerate() {
            for (c, s) in row.chars().enumerate() {
                assert!(board.update_board(&Move::new(r, 3 + c, s)));
            }
        }
        assert_eq!(board.meta().get(0, 1), Some(DRAW_MARK));
    }

    #[test]
    fn test_render_has_separators() {
        let board = UltimateBoard::new();
        let settings = UiSettings::new(UltimateBoard::TITLE, 2, 1, false);
        let text = UltimateBoard::render(&board.board_matrix(), &settings);
        assert_eq!(text.lines().filter(|l| l.contains("+=======+")).count(), 4);
    }
}
