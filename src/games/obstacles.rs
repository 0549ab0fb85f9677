//! Obstacles: four in a row on 6×6 while the free space shrinks.

use super::EMPTY;
use crate::framework::lines::{Direction, run_through};
use crate::framework::{Board, Coord, Grid, Move, Player};
use crate::ui::{ConsolePlay, MatchRng};
use tracing::{debug, instrument};

/// Mark written into cells taken by obstacles.
pub const OBSTACLE: char = '#';

/// Run length needed to win.
pub const WIN_LENGTH: usize = 4;

/// 6×6 board that drops random obstacles after every placement.
///
/// Obstacles are not moves: they do not count towards `n_moves`.
#[derive(Debug, Clone)]
pub struct ObstaclesBoard {
    grid: Grid<char>,
    rng: MatchRng,
    per_turn: usize,
    last: Option<Coord>,
}

impl ObstaclesBoard {
    /// Creates an empty board that drops `per_turn` obstacles per placement.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn new(rng: MatchRng, per_turn: usize) -> Self {
        Self {
            grid: Grid::new(6, 6, EMPTY),
            rng,
            per_turn,
            last: None,
        }
    }

    /// Coordinate of the most recent placement.
    pub fn last_placement(&self) -> Option<Coord> {
        self.last
    }

    /// Obstacles on the board.
    pub fn obstacle_count(&self) -> usize {
        self.grid.count(OBSTACLE)
    }

    fn drop_obstacles(&mut self) {
        for _ in 0..self.per_turn {
            let Some(at) = self.rng.pick(&self.grid.empty_cells()) else {
                break;
            };
            self.grid.put(at.row, at.col, OBSTACLE);
            debug!(%at, "Obstacle placed");
        }
    }
}

impl Board for ObstaclesBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        if mv.is_erase() || mv.symbol() == OBSTACLE {
            return false;
        }
        if !self.grid.place(mv.row(), mv.col(), mv.symbol()) {
            return false;
        }
        self.last = Some(mv.target());
        self.drop_obstacles();
        true
    }

    /// Only lines through the last placement are inspected.
    fn is_win(&self, player: &Player<char>) -> bool {
        self.last.is_some_and(|at| {
            Direction::ALL
                .iter()
                .any(|&d| run_through(&self.grid, at, d, player.symbol()) >= WIN_LENGTH)
        })
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.is_full() && !self.is_win(player)
    }
}

impl ConsolePlay for ObstaclesBoard {
    const TITLE: &'static str = "Obstacles Tic-Tac-Toe";
}
