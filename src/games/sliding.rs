//! Sliding tokens on 4×4.

use super::{EMPTY, opponent};
use crate::framework::lines::has_run;
use crate::framework::{Board, Coord, Grid, Move, Player};
use crate::ui::{Console, ConsolePlay, InputSource, MatchRng, UiError};
use std::io::Write;
use tracing::{debug, instrument};

const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 4×4 board where every move slides one of the mover's tokens.
///
/// Starting tokens are laid out alternately on the top and bottom rows.
/// They are not moves, so the grid counter stays at zero; the board
/// counts accepted slides instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingBoard {
    grid: Grid<char>,
    slides: usize,
}

impl SlidingBoard {
    /// Creates the starting position.
    #[instrument]
    pub fn new() -> Self {
        let [x, o] = Self::symbols();
        let mut grid = Grid::new(4, 4, EMPTY);
        for col in 0..4 {
            let (top, bottom) = if col % 2 == 0 { (o, x) } else { (x, o) };
            grid.put(0, col, top);
            grid.put(3, col, bottom);
        }
        Self { grid, slides: 0 }
    }

    /// Every `(from, to)` slide available to `symbol`.
    pub fn legal_slides(&self, symbol: char) -> Vec<(Coord, Coord)> {
        self.grid
            .coords()
            .filter(|&from| self.grid.at(from) == Some(symbol))
            .flat_map(move |from| {
                STEPS
                    .iter()
                    .filter_map(move |&(dr, dc)| from.offset(dr, dc))
                    .filter(move |to| self.grid.is_empty_at(to.row, to.col))
                    .map(move |to| (from, to))
            })
            .collect()
    }
}

impl Default for SlidingBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for SlidingBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        let Some(from) = mv.from() else {
            return false;
        };
        let to = mv.target();
        if self.grid.at(from) != Some(mv.symbol())
            || !self.grid.is_empty_at(to.row, to.col)
            || !from.is_orthogonal_neighbour(to)
        {
            return false;
        }
        self.grid.put(from.row, from.col, EMPTY);
        self.grid.put(to.row, to.col, mv.symbol());
        self.slides += 1;
        true
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        has_run(&self.grid, player.symbol(), 3)
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    /// The opponent is stuck with no slide to make.
    fn is_draw(&self, player: &Player<char>) -> bool {
        let other = opponent(Self::symbols(), player.symbol());
        !self.is_win(player) && self.legal_slides(other).is_empty()
    }

    fn move_count(&self) -> usize {
        self.slides
    }
}

impl ConsolePlay for SlidingBoard {
    const TITLE: &'static str = "4x4 Sliding Tic-Tac-Toe";

    fn human_move<R, W>(&self, console: &mut Console<R, W>, player: &Player<char>) -> Result<Move<char>, UiError>
    where
        R: InputSource,
        W: Write,
    {
        let from = console.ask_coords(
            &format!("{} ({}), enter the token to move as row col: ", player.name(), player.symbol()),
            self.rows(),
            self.columns(),
        )?;
        let to = console.ask_coords("Enter the destination as row col: ", self.rows(), self.columns())?;
        Ok(Move::slide(from, to.row, to.col, player.symbol()))
    }

    fn computer_move(&self, rng: &mut MatchRng, player: &Player<char>) -> Option<Move<char>> {
        let (from, to) = rng.pick(&self.legal_slides(player.symbol()))?;
        debug!(%from, %to, "Computer slide");
        Some(Move::slide(from, to.row, to.col, player.symbol()))
    }
}
