//! 5×5: the game stops after 24 placements and sequences are counted.

use super::{EMPTY, opponent, place_or_erase};
use crate::framework::lines::maximal_runs;
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::ConsolePlay;
use tracing::instrument;

/// Placements after which the board is scored.
pub const SCORING_MOVES: usize = 24;

/// 5×5 board scored by counting three-in-a-row sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiveByFiveBoard {
    grid: Grid<char>,
}

impl FiveByFiveBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(5, 5, EMPTY),
        }
    }

    /// Three-in-a-row sequences of `symbol`.
    ///
    /// A maximal run of length `L ≥ 3` holds `L − 2` overlapping sequences.
    pub fn sequences(&self, symbol: char) -> usize {
        maximal_runs(&self.grid, symbol)
            .into_iter()
            .filter(|&run| run >= 3)
            .map(|run| run - 2)
            .sum()
    }

    fn scored(&self, player: &Player<char>) -> Option<(usize, usize)> {
        if self.grid.move_count() < SCORING_MOVES {
            return None;
        }
        let theirs = opponent(Self::symbols(), player.symbol());
        Some((self.sequences(player.symbol()), self.sequences(theirs)))
    }
}

impl Default for FiveByFiveBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FiveByFiveBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        place_or_erase(&mut self.grid, mv)
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        self.scored(player).is_some_and(|(mine, theirs)| mine > theirs)
    }

    fn is_lose(&self, player: &Player<char>) -> bool {
        self.scored(player).is_some_and(|(mine, theirs)| mine < theirs)
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.scored(player).is_some_and(|(mine, theirs)| mine == theirs)
    }
}

impl ConsolePlay for FiveByFiveBoard {
    const TITLE: &'static str = "5x5 Tic-Tac-Toe";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_run_counts_overlaps() {
        let mut board = FiveByFiveBoard::new();
        for c in 0..5 {
            assert!(board.update_board(&Move::new(0, c, 'X')));
        }
        assert_eq!(board.sequences('X'), 3);
        assert_eq!(board.sequences('O'), 0);
    }
}
