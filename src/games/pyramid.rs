//! Pyramid: a 3×5 grid masked to a nine-cell triangle.

use super::{EMPTY, place_or_erase};
use crate::framework::lines::{Line, segments};
use crate::framework::{Board, Coord, Grid, Move, Player};
use crate::ui::{ConsolePlay, UiSettings, render_masked};
use tracing::instrument;

/// Whether `at` lies inside the pyramid.
pub fn in_pyramid(at: Coord) -> bool {
    at.row < 3 && at.col.abs_diff(2) <= at.row
}

/// Pyramid board. Cells outside the mask can never be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidBoard {
    grid: Grid<char>,
    lines: Vec<Line>,
}

impl PyramidBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        let grid = Grid::new(3, 5, EMPTY);
        let lines = segments(&grid, 3, in_pyramid);
        Self { grid, lines }
    }

    /// The winning lines: three base triples, the middle row, the centre
    /// column and both edges.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of cells inside the mask.
    pub fn valid_cells(&self) -> usize {
        self.grid.coords().filter(|&c| in_pyramid(c)).count()
    }
}

impl Default for PyramidBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for PyramidBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        in_pyramid(mv.target()) && place_or_erase(&mut self.grid, mv)
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        self.lines.iter().any(|l| l.all(&self.grid, player.symbol()))
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.move_count() == self.valid_cells() && !self.is_win(player)
    }

    fn is_playable(&self, row: usize, col: usize) -> bool {
        in_pyramid(Coord::new(row, col)) && self.grid.is_empty_at(row, col)
    }
}

impl ConsolePlay for PyramidBoard {
    const TITLE: &'static str = "Pyramid Tic-Tac-Toe";

    fn render(matrix: &[Vec<char>], settings: &UiSettings) -> String {
        render_masked(matrix, settings.cell_width, settings.hidden, EMPTY, |r, c| {
            in_pyramid(Coord::new(r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_and_lines() {
        let board = PyramidBoard::new();
        assert_eq!(board.valid_cells(), 9);
        assert_eq!(board.lines().len(), 7);
        assert_eq!(board.playable_cells().len(), 9);
    }

    #[test]
    fn test_rejects_cells_outside_the_mask() {
        let mut board = PyramidBoard::new();
        assert!(!board.update_board(&Move::new(0, 0, 'X')));
        assert!(!board.update_board(&Move::new(1, 4, 'X')));
        assert!(board.update_board(&Move::new(0, 2, 'X')));
    }
}
