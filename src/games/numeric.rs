//! Numeric: odd against even, lines summing to fifteen.

use super::{EMPTY, place_or_erase};
use crate::framework::lines::{Line, segments};
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::{Console, ConsolePlay, InputSource, MatchRng, UiError};
use std::io::Write;
use tracing::instrument;

/// Sum a full line must reach.
pub const TARGET: u32 = 15;

/// 3×3 board holding the digits 1 to 9, each at most once.
///
/// The first player places odd digits and the second even ones; whose
/// turn it is follows from the move count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericBoard {
    grid: Grid<char>,
    lines: Vec<Line>,
}

impl NumericBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        let grid = Grid::new(3, 3, EMPTY);
        let lines = segments(&grid, 3, |_| true);
        Self { grid, lines }
    }

    /// Whether the next placement must be odd.
    pub fn odd_to_move(&self) -> bool {
        self.grid.move_count() % 2 == 0
    }

    /// Digits the player to move may still place.
    pub fn available_numbers(&self) -> Vec<char> {
        let parity = if self.odd_to_move() { 1 } else { 0 };
        (1..=9u32)
            .filter(|n| n % 2 == parity)
            .filter_map(|n| char::from_digit(n, 10))
            .filter(|&d| self.grid.count(d) == 0)
            .collect()
    }

    fn line_sum(&self, line: &Line) -> Option<u32> {
        line.contents(&self.grid)?
            .into_iter()
            .map(|c| c.to_digit(10))
            .sum()
    }
}

impl Default for NumericBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for NumericBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        if !mv.is_erase() && !self.available_numbers().contains(&mv.symbol()) {
            return false;
        }
        place_or_erase(&mut self.grid, mv)
    }

    fn is_win(&self, _player: &Player<char>) -> bool {
        self.lines.iter().any(|line| self.line_sum(line) == Some(TARGET))
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.is_full() && !self.is_win(player)
    }
}

impl ConsolePlay for NumericBoard {
    const TITLE: &'static str = "Numerical Tic-Tac-Toe";

    fn symbols() -> [char; 2] {
        ['O', 'X']
    }

    fn human_move<R, W>(&self, console: &mut Console<R, W>, player: &Player<char>) -> Result<Move<char>, UiError>
    where
        R: InputSource,
        W: Write,
    {
        let available = self.available_numbers();
        let at = console.ask_coords(
            &format!("{}, enter your move as row col: ", player.name()),
            self.rows(),
            self.columns(),
        )?;
        let listed: Vec<String> = available.iter().map(char::to_string).collect();
        let number = console.ask_char(
            &format!("Number ({}): ", listed.join(", ")),
            |c| available.contains(&c),
        )?;
        Ok(Move::new(at.row, at.col, number))
    }

    fn computer_move(&self, rng: &mut MatchRng, _player: &Player<char>) -> Option<Move<char>> {
        let at = rng.pick(&self.playable_cells())?;
        let number = rng.pick(&self.available_numbers())?;
        Some(Move::new(at.row, at.col, number))
    }
}
