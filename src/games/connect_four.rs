//! Connect four: gravity on a 6×7 grid.

use super::EMPTY;
use crate::framework::lines::has_run;
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::{Console, ConsolePlay, InputSource, UiError};
use std::io::Write;
use tracing::{debug, instrument};

/// Run length needed to win.
pub const WIN_LENGTH: usize = 4;

/// 6×7 board where marks fall to the lowest empty cell of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFourBoard {
    grid: Grid<char>,
}

impl ConnectFourBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(6, 7, EMPTY),
        }
    }

    /// Row a mark dropped into `col` lands on, or `None` when the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.grid.rows())
            .rev()
            .find(|&row| self.grid.is_empty_at(row, col))
    }
}

impl Default for ConnectFourBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ConnectFourBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        if mv.is_erase() || self.landing_row(mv.col()) != Some(mv.row()) {
            return false;
        }
        self.grid.place(mv.row(), mv.col(), mv.symbol())
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        has_run(&self.grid, player.symbol(), WIN_LENGTH)
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.is_full() && !self.is_win(player)
    }

    fn is_playable(&self, row: usize, col: usize) -> bool {
        self.landing_row(col) == Some(row)
    }
}

impl ConsolePlay for ConnectFourBoard {
    const TITLE: &'static str = "Connect Four";

    /// Asks for a column only.
    fn human_move<R, W>(&self, console: &mut Console<R, W>, player: &Player<char>) -> Result<Move<char>, UiError>
    where
        R: InputSource,
        W: Write,
    {
        let columns = self.columns();
        loop {
            let col = console.ask_numbers(
                &format!(
                    "{} ({}), choose a column (0 to {}): ",
                    player.name(),
                    player.symbol(),
                    columns - 1
                ),
                1,
            )?[0];
            if col >= columns {
                console.say("Out of range. Try again.")?;
                continue;
            }
            match self.landing_row(col) {
                Some(row) => return Ok(Move::new(row, col, player.symbol())),
                None => {
                    debug!(col, "Column full");
                    console.say("That column is full. Try again.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::PlayerKind;

    #[test]
    fn test_gravity() {
        let mut board = ConnectFourBoard::new();
        assert_eq!(board.landing_row(3), Some(5));
        assert!(!board.update_board(&Move::new(0, 3, 'X')));
        assert!(board.update_board(&Move::new(5, 3, 'X')));
        assert_eq!(board.landing_row(3), Some(4));
        assert_eq!(board.playable_cells().len(), 7);
    }

    #[test]
    fn test_vertical_four_wins() {
        let x = Player::new("x", 'X', PlayerKind::Human);
        let mut board = ConnectFourBoard::new();
        for row in (2..6).rev() {
            assert!(board.update_board(&Move::new(row, 0, 'X')));
        }
        assert!(board.is_win(&x));
        assert_eq!(board.landing_row(0), Some(1));
    }
}
