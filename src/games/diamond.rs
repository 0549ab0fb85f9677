//! Diamond: a 5×5 grid masked to thirteen cells.

use super::{EMPTY, place_or_erase};
use crate::framework::lines::{Line, segments};
use crate::framework::{Board, Coord, Grid, Move, Player};
use crate::ui::{ConsolePlay, UiSettings, render_masked};
use tracing::instrument;

/// Whether `at` lies inside the diamond centred on `(2, 2)`.
pub fn in_diamond(at: Coord) -> bool {
    at.row.abs_diff(2) + at.col.abs_diff(2) <= 2
}

/// Diamond board.
///
/// A player wins with a full line of three and a full line of four in
/// different directions; the two may share one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiamondBoard {
    grid: Grid<char>,
    threes: Vec<Line>,
    fours: Vec<Line>,
    valid_cells: usize,
}

impl DiamondBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        let grid = Grid::new(5, 5, EMPTY);
        let threes = segments(&grid, 3, in_diamond);
        let fours = segments(&grid, 4, in_diamond);
        let valid_cells = grid.coords().filter(|&c| in_diamond(c)).count();
        Self {
            grid,
            threes,
            fours,
            valid_cells,
        }
    }

    /// Number of cells inside the mask.
    pub fn valid_cells(&self) -> usize {
        self.valid_cells
    }

    /// Whether `symbol` holds a 3-line and a 4-line in different directions.
    pub fn has_pattern(&self, symbol: char) -> bool {
        let threes: Vec<_> = self
            .threes
            .iter()
            .filter(|l| l.all(&self.grid, symbol))
            .map(|l| l.direction)
            .collect();
        self.fours
            .iter()
            .filter(|l| l.all(&self.grid, symbol))
            .any(|four| threes.iter().any(|&d| d != four.direction))
    }
}

impl Default for DiamondBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for DiamondBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        in_diamond(mv.target()) && place_or_erase(&mut self.grid, mv)
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        self.has_pattern(player.symbol())
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, _player: &Player<char>) -> bool {
        self.grid.move_count() >= self.valid_cells
            && Self::symbols().iter().all(|&s| !self.has_pattern(s))
    }

    fn is_playable(&self, row: usize, col: usize) -> bool {
        in_diamond(Coord::new(row, col)) && self.grid.is_empty_at(row, col)
    }
}

impl ConsolePlay for DiamondBoard {
    const TITLE: &'static str = "Diamond Tic-Tac-Toe";

    fn render(matrix: &[Vec<char>], settings: &UiSettings) -> String {
        render_masked(matrix, settings.cell_width, settings.hidden, EMPTY, |r, c| {
            in_diamond(Coord::new(r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::PlayerKind;

    #[test]
    fn test_mask() {
        let mut board = DiamondBoard::new();
        assert_eq!(board.valid_cells(), 13);
        assert!(!board.update_board(&Move::new(0, 0, 'X')));
        assert!(board.update_board(&Move::new(0, 2, 'X')));
    }

    #[test]
    fn test_needs_two_directions() {
        let x = Player::new("x", 'X', PlayerKind::Human);
        let mut board = DiamondBoard::new();
        // Column 2 from row 0 to row 3: a four-line that also contains threes.
        for r in 0..4 {
            assert!(board.update_board(&Move::new(r, 2, 'X')));
        }
        assert!(!board.is_win(&x));
        // Row 2, columns 1 to 3 shares (2, 2) with the column.
        assert!(board.update_board(&Move::new(2, 1, 'X')));
        assert!(board.update_board(&Move::new(2, 3, 'X')));
        assert!(board.is_win(&x));
    }
}
