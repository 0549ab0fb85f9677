//! Shared grid bookkeeping embedded by every board.
//!
//! `Grid` owns the cells, the empty marker and the move counter. All
//! coordinate access is bounds-checked; nothing here panics on bad input.

use super::action::{Coord, Symbol};
use tracing::{instrument, trace};

/// A `rows × columns` grid of marks with a move counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C> {
    rows: usize,
    columns: usize,
    cells: Vec<C>,
    empty: C,
    n_moves: usize,
}

impl<C: Symbol> Grid<C> {
    /// Creates a grid with every cell set to `empty`.
    #[instrument]
    pub fn new(rows: usize, columns: usize, empty: C) -> Self {
        Self {
            rows,
            columns,
            cells: vec![empty; rows * columns],
            empty,
            n_moves: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The sentinel for unoccupied cells.
    pub fn empty_marker(&self) -> C {
        self.empty
    }

    /// Moves applied so far, net of erasures.
    pub fn move_count(&self) -> usize {
        self.n_moves
    }

    /// Returns true when `(row, col)` lies inside the grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.in_bounds(row, col).then(|| row * self.columns + col)
    }

    /// Reads a cell, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<C> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Reads a cell by coordinate.
    pub fn at(&self, coord: Coord) -> Option<C> {
        self.get(coord.row, coord.col)
    }

    /// Returns true when the cell exists and holds the empty marker.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(self.empty)
    }

    /// Writes `symbol` into an empty cell and counts the move.
    ///
    /// Returns false without mutating anything when the cell is out of
    /// range or occupied, or when `symbol` is the empty marker or the
    /// erase sentinel.
    pub fn place(&mut self, row: usize, col: usize, symbol: C) -> bool {
        if symbol == self.empty || symbol == C::ERASE {
            return false;
        }
        match self.index(row, col) {
            Some(i) if self.cells[i] == self.empty => {
                self.cells[i] = symbol;
                self.n_moves += 1;
                trace!(row, col, %symbol, n_moves = self.n_moves, "Placed");
                true
            }
            _ => false,
        }
    }

    /// Clears an occupied cell and uncounts the move.
    ///
    /// Erasing an empty cell is rejected so the counter never underflows.
    pub fn erase(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) if self.cells[i] != self.empty && self.n_moves > 0 => {
                self.cells[i] = self.empty;
                self.n_moves -= 1;
                trace!(row, col, n_moves = self.n_moves, "Erased");
                true
            }
            _ => false,
        }
    }

    /// Writes a cell without touching the move counter.
    ///
    /// For side effects that are not moves (obstacles, initial tokens).
    pub fn put(&mut self, row: usize, col: usize, symbol: C) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = symbol;
                true
            }
            None => false,
        }
    }

    /// Returns true when no cell holds the empty marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != self.empty)
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|c| self.is_empty_at(c.row, c.col))
            .collect()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Coord::new(row, col)))
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: C) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    /// Read-only snapshot as nested rows.
    pub fn matrix(&self) -> Vec<Vec<C>> {
        self.cells
            .chunks(self.columns.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}
