//! Infinity: every symbol keeps at most three marks on the board.

use super::EMPTY;
use crate::framework::lines::has_run;
use crate::framework::{Board, Coord, Grid, Move, Player};
use crate::ui::ConsolePlay;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Marks a single symbol may keep before its oldest expires.
pub const MARKS_PER_SYMBOL: usize = 3;

/// 3×3 board with a sliding window of live marks.
///
/// Placing a fourth mark of a symbol clears that symbol's oldest mark,
/// so the board never fills and there is no draw. The move counter
/// counts placements; only undo moves take it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfinityBoard {
    grid: Grid<char>,
    live: VecDeque<Coord>,
}

impl InfinityBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, EMPTY),
            live: VecDeque::new(),
        }
    }

    /// Live marks of `symbol`, oldest first.
    pub fn live_marks(&self, symbol: char) -> Vec<Coord> {
        self.live
            .iter()
            .copied()
            .filter(|&at| self.grid.at(at) == Some(symbol))
            .collect()
    }

    /// The mark of `symbol` that expires on its next placement, if any.
    pub fn next_to_expire(&self, symbol: char) -> Option<Coord> {
        let marks = self.live_marks(symbol);
        if marks.len() >= MARKS_PER_SYMBOL {
            marks.first().copied()
        } else {
            None
        }
    }
}

impl Default for InfinityBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for InfinityBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        let target = mv.target();
        if mv.is_erase() {
            if !self.grid.erase(target.row, target.col) {
                return false;
            }
            self.live.retain(|&at| at != target);
            return true;
        }

        let expiring = self.next_to_expire(mv.symbol());
        if !self.grid.place(target.row, target.col, mv.symbol()) {
            return false;
        }
        self.live.push_back(target);
        if let Some(oldest) = expiring {
            // Expiry is not an undo; the placement still counts.
            self.grid.put(oldest.row, oldest.col, EMPTY);
            self.live.retain(|&at| at != oldest);
            debug!(symbol = %mv.symbol(), %oldest, "Mark expired");
        }
        true
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        has_run(&self.grid, player.symbol(), 3)
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, _player: &Player<char>) -> bool {
        false
    }
}

impl ConsolePlay for InfinityBoard {
    const TITLE: &'static str = "Infinity Tic-Tac-Toe";
}
