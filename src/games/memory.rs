//! Classic rules with the marks kept out of sight.

use super::ClassicBoard;
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::ConsolePlay;

/// Classic 3×3 board whose occupied cells render as `#`.
///
/// Players have to remember who holds which cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBoard {
    inner: ClassicBoard,
}

impl MemoryBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Board for MemoryBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        self.inner.grid()
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        self.inner.update_board(mv)
    }

    fn is_win(&self, player: &Player<char>) -> bool {
        self.inner.is_win(player)
    }

    fn is_lose(&self, player: &Player<char>) -> bool {
        self.inner.is_lose(player)
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.inner.is_draw(player)
    }
}

impl ConsolePlay for MemoryBoard {
    const TITLE: &'static str = "Memory Tic-Tac-Toe";
    const HIDDEN: bool = true;
}
