//! The board contract every variant honors.
//!
//! A board is passive: it never calls into the UI or the manager. The
//! manager is the only caller of [`Board::update_board`], which makes it
//! the single mutation point for grid state.

use super::action::{Coord, Move, Symbol};
use super::grid::Grid;
use super::player::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Lifecycle of a board as seen from one player.
///
/// `Won`, `Lost` and `Drawn` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// No move applied yet.
    Empty,
    /// At least one move applied and no terminal condition holds.
    InProgress,
    /// The queried player has won.
    Won,
    /// The queried player has lost.
    Lost,
    /// The match is drawn.
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won`, `Lost` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Drawn)
    }
}

/// Grid state plus the terminal-state predicates of one rule set.
pub trait Board {
    /// The mark type stored in cells.
    type Cell: Symbol;

    /// Shared bookkeeping.
    fn grid(&self) -> &Grid<Self::Cell>;

    /// Validates and applies a move.
    ///
    /// Returns false and leaves the board untouched when the move is out
    /// of range, targets an occupied cell, or breaks a variant rule. A
    /// successful call may also perform variant bookkeeping.
    fn update_board(&mut self, mv: &Move<Self::Cell>) -> bool;

    /// Whether `player` has won in the current state.
    fn is_win(&self, player: &Player<Self::Cell>) -> bool;

    /// Whether `player` has lost in the current state.
    fn is_lose(&self, player: &Player<Self::Cell>) -> bool;

    /// Whether the match is drawn from `player`'s point of view.
    fn is_draw(&self, player: &Player<Self::Cell>) -> bool;

    /// `is_win ∨ is_lose ∨ is_draw`, evaluated in that order.
    fn game_is_over(&self, player: &Player<Self::Cell>) -> bool {
        self.is_win(player) || self.is_lose(player) || self.is_draw(player)
    }

    /// Current lifecycle state for `player`, resolving win before lose before draw.
    #[instrument(skip_all, fields(player = %player.name()))]
    fn status(&self, player: &Player<Self::Cell>) -> GameStatus {
        if self.is_win(player) {
            GameStatus::Won
        } else if self.is_lose(player) {
            GameStatus::Lost
        } else if self.is_draw(player) {
            GameStatus::Drawn
        } else if self.move_count() == 0 {
            GameStatus::Empty
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of rows.
    fn rows(&self) -> usize {
        self.grid().rows()
    }

    /// Number of columns.
    fn columns(&self) -> usize {
        self.grid().columns()
    }

    /// Reads a cell, or `None` when out of range.
    fn cell(&self, row: usize, col: usize) -> Option<Self::Cell> {
        self.grid().get(row, col)
    }

    /// Moves applied so far, net of erasures.
    fn move_count(&self) -> usize {
        self.grid().move_count()
    }

    /// The sentinel for unoccupied cells.
    fn empty_marker(&self) -> Self::Cell {
        self.grid().empty_marker()
    }

    /// Read-only snapshot for rendering.
    fn board_matrix(&self) -> Vec<Vec<Self::Cell>> {
        self.grid().matrix()
    }

    /// Whether a fresh mark may go at `(row, col)`.
    ///
    /// Defaults to "in range and empty"; variants with masks, gravity or
    /// locked regions narrow it. Computer players choose among these.
    fn is_playable(&self, row: usize, col: usize) -> bool {
        self.grid().is_empty_at(row, col)
    }

    /// Every coordinate for which [`Board::is_playable`] holds.
    fn playable_cells(&self) -> Vec<Coord> {
        self.grid()
            .coords()
            .filter(|c| self.is_playable(c.row, c.col))
            .collect()
    }
}
