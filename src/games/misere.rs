//! Misère: completing your own line loses.

use super::{EMPTY, opponent, place_or_erase};
use crate::framework::lines::has_run;
use crate::framework::{Board, Coord, Grid, Move, Player};
use crate::ui::{Console, ConsolePlay, InputSource, MatchRng, UiError};
use std::io::Write;
use tracing::{debug, instrument};

/// 3×3 board where the first player to complete a line loses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisereBoard {
    grid: Grid<char>,
}

impl MisereBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, EMPTY),
        }
    }

    /// Whether placing `symbol` at `at` would complete a line of `symbol`.
    pub fn completes_line(&self, at: Coord, symbol: char) -> bool {
        let mut trial = self.grid.clone();
        trial.place(at.row, at.col, symbol) && has_run(&trial, symbol, 3)
    }

    /// Playable cells that do not complete a line of `symbol`.
    pub fn safe_cells(&self, symbol: char) -> Vec<Coord> {
        self.playable_cells()
            .into_iter()
            .filter(|&at| !self.completes_line(at, symbol))
            .collect()
    }
}

impl Default for MisereBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for MisereBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        place_or_erase(&mut self.grid, mv)
    }

    /// The opponent completed a line.
    fn is_win(&self, player: &Player<char>) -> bool {
        has_run(&self.grid, opponent(Self::symbols(), player.symbol()), 3)
    }

    /// The player completed a line.
    fn is_lose(&self, player: &Player<char>) -> bool {
        has_run(&self.grid, player.symbol(), 3)
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.is_full() && !self.is_win(player) && !self.is_lose(player)
    }
}

impl ConsolePlay for MisereBoard {
    const TITLE: &'static str = "Misère Tic-Tac-Toe";

    fn human_move<R, W>(&self, console: &mut Console<R, W>, player: &Player<char>) -> Result<Move<char>, UiError>
    where
        R: InputSource,
        W: Write,
    {
        loop {
            let at = console.ask_coords(
                &format!("{} ({}), enter your move as row col: ", player.name(), player.symbol()),
                self.rows(),
                self.columns(),
            )?;
            if self.completes_line(at, player.symbol()) {
                console.say(&format!(
                    "Warning: placing '{}' at {} completes your own line and loses.",
                    player.symbol(),
                    at
                ))?;
                if !console.confirm("Make this move anyway? (y/n): ")? {
                    console.say("Choose a different move.")?;
                    continue;
                }
            }
            return Ok(Move::new(at.row, at.col, player.symbol()));
        }
    }

    /// Prefers cells that do not lose on the spot.
    fn computer_move(&self, rng: &mut MatchRng, player: &Player<char>) -> Option<Move<char>> {
        let safe = self.safe_cells(player.symbol());
        let pool = if safe.is_empty() {
            debug!(player = %player.name(), "No safe move left");
            self.playable_cells()
        } else {
            safe
        };
        rng.pick(&pool).map(|at| Move::new(at.row, at.col, player.symbol()))
    }
}
