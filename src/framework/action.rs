//! First-class move types shared by every variant.
//!
//! A move is a value: created by the UI, consumed by the manager within
//! the same turn, then dropped. It carries no reference to the board.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// A mark that can occupy a grid cell.
///
/// `ERASE` is the distinguished undo sentinel: a move carrying it clears
/// an occupied cell instead of placing a mark.
pub trait Symbol: Copy + Eq + fmt::Debug + fmt::Display {
    /// Sentinel symbol requesting that the target cell be cleared.
    const ERASE: Self;
}

impl Symbol for char {
    const ERASE: char = '\0';
}

impl Symbol for u8 {
    const ERASE: u8 = 0;
}

/// A cell coordinate, row-major and zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Steps by a signed direction, returning `None` when the result would be negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    /// Returns true when `other` is one orthogonal step away.
    pub fn is_orthogonal_neighbour(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single placement: target coordinate plus the mark to write.
///
/// `from` is only meaningful for variants where a move relocates an
/// existing token; placement variants ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<C> {
    row: usize,
    col: usize,
    symbol: C,
    from: Option<Coord>,
}

impl<C: Symbol> Move<C> {
    /// Creates a placement move.
    #[instrument]
    pub fn new(row: usize, col: usize, symbol: C) -> Self {
        Self {
            row,
            col,
            symbol,
            from: None,
        }
    }

    /// Creates a move that slides the token at `from` onto `(row, col)`.
    #[instrument]
    pub fn slide(from: Coord, row: usize, col: usize, symbol: C) -> Self {
        Self {
            row,
            col,
            symbol,
            from: Some(from),
        }
    }

    /// Creates an undo move clearing `(row, col)`.
    pub fn erase(row: usize, col: usize) -> Self {
        Self::new(row, col, C::ERASE)
    }

    /// Target row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Target column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Target coordinate.
    pub fn target(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// The mark being written.
    pub fn symbol(&self) -> C {
        self.symbol
    }

    /// Origin of a sliding move, if any.
    pub fn from(&self) -> Option<Coord> {
        self.from
    }

    /// Returns true when this move is an undo request.
    pub fn is_erase(&self) -> bool {
        self.symbol == C::ERASE
    }
}

impl<C: Symbol> fmt::Display for Move<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "{} {} -> {}", self.symbol, from, self.target()),
            None if self.is_erase() => write!(f, "erase {}", self.target()),
            None => write!(f, "{} -> {}", self.symbol, self.target()),
        }
    }
}
