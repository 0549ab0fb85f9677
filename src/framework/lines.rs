//! Straight-line scanning shared by the line-completion variants.

use super::action::{Coord, Symbol};
use super::grid::Grid;

/// One of the four line orientations on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// All orientations.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Forward `(row, col)` step.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A fixed straight segment of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Cells in order along the direction.
    pub cells: Vec<Coord>,
    /// Orientation.
    pub direction: Direction,
}

impl Line {
    /// Returns true when every cell holds `symbol`.
    pub fn all<C: Symbol>(&self, grid: &Grid<C>, symbol: C) -> bool {
        self.cells.iter().all(|&c| grid.at(c) == Some(symbol))
    }

    /// Cell contents along the line; `None` if any cell is out of range.
    pub fn contents<C: Symbol>(&self, grid: &Grid<C>) -> Option<Vec<C>> {
        self.cells.iter().map(|&c| grid.at(c)).collect()
    }
}

/// Every segment of exactly `len` cells whose cells all satisfy `valid`.
pub fn segments<C, F>(grid: &Grid<C>, len: usize, valid: F) -> Vec<Line>
where
    C: Symbol,
    F: Fn(Coord) -> bool,
{
    let mut lines = Vec::new();
    for start in grid.coords() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.step();
            let cells: Option<Vec<Coord>> = (0..len)
                .map(|k| {
                    let k = k as isize;
                    start
                        .offset(dr * k, dc * k)
                        .filter(|c| grid.in_bounds(c.row, c.col) && valid(*c))
                })
                .collect();
            if let Some(cells) = cells {
                lines.push(Line { cells, direction });
            }
        }
    }
    lines
}

/// Consecutive cells holding `symbol` starting one step past `from`.
pub fn count_run<C: Symbol>(grid: &Grid<C>, from: Coord, step: (isize, isize), symbol: C) -> usize {
    let mut count = 0;
    let mut cursor = from.offset(step.0, step.1);
    while let Some(c) = cursor {
        if grid.at(c) != Some(symbol) {
            break;
        }
        count += 1;
        cursor = c.offset(step.0, step.1);
    }
    count
}

/// Length of the longest `symbol` run through `at` along `direction`.
///
/// Counts `at` itself only if it holds `symbol`.
pub fn run_through<C: Symbol>(grid: &Grid<C>, at: Coord, direction: Direction, symbol: C) -> usize {
    if grid.at(at) != Some(symbol) {
        return 0;
    }
    let (dr, dc) = direction.step();
    1 + count_run(grid, at, (dr, dc), symbol) + count_run(grid, at, (-dr, -dc), symbol)
}

/// Lengths of every maximal `symbol` run in all four directions.
pub fn maximal_runs<C: Symbol>(grid: &Grid<C>, symbol: C) -> Vec<usize> {
    let mut runs = Vec::new();
    for start in grid.coords() {
        if grid.at(start) != Some(symbol) {
            continue;
        }
        for direction in Direction::ALL {
            let (dr, dc) = direction.step();
            let continues_backward = start
                .offset(-dr, -dc)
                .is_some_and(|prev| grid.at(prev) == Some(symbol));
            if !continues_backward {
                runs.push(1 + count_run(grid, start, (dr, dc), symbol));
            }
        }
    }
    runs
}

/// Returns true when `symbol` has a run of at least `len` anywhere.
pub fn has_run<C: Symbol>(grid: &Grid<C>, symbol: C, len: usize) -> bool {
    symbol != grid.empty_marker() && maximal_runs(grid, symbol).into_iter().any(|r| r >= len)
}
