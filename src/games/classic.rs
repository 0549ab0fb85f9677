//! Classic three in a row.

use super::{EMPTY, place_or_erase};
use crate::framework::lines::has_run;
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::ConsolePlay;
use tracing::instrument;

/// 3×3 board; the first complete line wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicBoard {
    grid: Grid<char>,
}

impl ClassicBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, EMPTY),
        }
    }
}

impl Default for ClassicBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ClassicBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        place_or_erase(&mut self.grid, mv)
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        has_run(&self.grid, player.symbol(), 3)
    }

    // Losing only happens through the opponent's win.
    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.is_full() && !self.is_win(player)
    }
}

impl ConsolePlay for ClassicBoard {
    const TITLE: &'static str = "Classic Tic-Tac-Toe";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::PlayerKind;

    fn players() -> [Player<char>; 2] {
        [
            Player::new("x", 'X', PlayerKind::Human),
            Player::new("o", 'O', PlayerKind::Human),
        ]
    }

    #[test]
    fn test_top_row_wins() {
        let [x, o] = players();
        let mut board = ClassicBoard::new();
        for (r, c, s) in [(0, 0, 'X'), (1, 0, 'O'), (0, 1, 'X'), (1, 1, 'O'), (0, 2, 'X')] {
            assert!(board.update_board(&Move::new(r, c, s)));
        }
        assert!(board.is_win(&x));
        assert!(!board.is_win(&o));
        assert_eq!(board.move_count(), 5);
    }

    #[test]
    fn test_erase_undoes_a_move() {
        let mut board = ClassicBoard::new();
        assert!(board.update_board(&Move::new(2, 2, 'X')));
        assert!(board.update_board(&Move::erase(2, 2)));
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.cell(2, 2), Some(EMPTY));
        assert!(!board.update_board(&Move::erase(2, 2)));
    }
}
