//! SUS: players place `S` and `U` and score every `SUS` they complete.

use super::EMPTY;
use crate::framework::lines::{Line, segments};
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::ConsolePlay;
use tracing::{debug, instrument};

const WORD: [char; 3] = ['S', 'U', 'S'];

/// 3×3 board with a per-letter score.
///
/// A completed `SUS` line scores for whoever placed its last letter.
/// When the board is full the higher score wins and the lower loses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SusBoard {
    grid: Grid<char>,
    lines: Vec<Line>,
    scores: [usize; 2],
}

impl SusBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        let grid = Grid::new(3, 3, EMPTY);
        let lines = segments(&grid, 3, |_| true);
        Self {
            grid,
            lines,
            scores: [0, 0],
        }
    }

    /// Lines scored by the player placing `symbol`.
    pub fn score(&self, symbol: char) -> usize {
        Self::slot(symbol).map_or(0, |i| self.scores[i])
    }

    fn slot(symbol: char) -> Option<usize> {
        Self::symbols().iter().position(|&s| s == symbol)
    }

    fn scores_for(&self, player: &Player<char>) -> (usize, usize) {
        let mine = self.score(player.symbol());
        let theirs = self.score(super::opponent(Self::symbols(), player.symbol()));
        (mine, theirs)
    }
}

impl Default for SusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for SusBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        let Some(slot) = Self::slot(mv.symbol()) else {
            return false;
        };
        let target = mv.target();
        if !self.grid.place(target.row, target.col, mv.symbol()) {
            return false;
        }
        let completed = self
            .lines
            .iter()
            .filter(|line| line.cells.contains(&target))
            .filter(|line| line.contents(&self.grid).as_deref() == Some(&WORD[..]))
            .count();
        if completed > 0 {
            self.scores[slot] += completed;
            debug!(symbol = %mv.symbol(), completed, scores = ?self.scores, "SUS scored");
        }
        true
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        let (mine, theirs) = self.scores_for(player);
        self.grid.is_full() && mine > theirs
    }

    fn is_lose(&self, player: &Player<char>) -> bool {
        let (mine, theirs) = self.scores_for(player);
        self.grid.is_full() && mine < theirs
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        let (mine, theirs) = self.scores_for(player);
        self.grid.is_full() && mine == theirs
    }
}

impl ConsolePlay for SusBoard {
    const TITLE: &'static str = "SUS";

    fn symbols() -> [char; 2] {
        ['S', 'U']
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completer_scores() {
        let mut board = SusBoard::new();
        assert!(board.update_board(&Move::new(0, 0, 'S')));
        assert!(board.update_board(&Move::new(0, 1, 'U')));
        assert_eq!(board.score('U'), 0);
        assert!(board.update_board(&Move::new(0, 2, 'S')));
        assert_eq!(board.score('S'), 1);
        assert_eq!(board.score('U'), 0);
    }

    #[test]
    fn test_rejects_foreign_letters() {
        let mut board = SusBoard::new();
        assert!(!board.update_board(&Move::new(0, 0, 'X')));
        assert!(!board.update_board(&Move::erase(0, 0)));
    }
}
