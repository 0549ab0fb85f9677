//! Plain-text board rendering.

use std::fmt::{Display, Write};

/// Renders a rectangular grid with row and column indices.
///
/// With `hidden`, every cell other than `empty` is drawn as `#`.
pub fn render_grid<C>(matrix: &[Vec<C>], cell_width: usize, hidden: bool, empty: C) -> String
where
    C: Display + PartialEq + Copy,
{
    render_masked(matrix, cell_width, hidden, empty, |_, _| true)
}

/// Renders a grid, leaving cells outside `valid` blank.
pub fn render_masked<C, F>(matrix: &[Vec<C>], cell_width: usize, hidden: bool, empty: C, valid: F) -> String
where
    C: Display + PartialEq + Copy,
    F: Fn(usize, usize) -> bool,
{
    let mut out = String::new();
    let Some(columns) = matrix.first().map(Vec::len) else {
        return out;
    };
    let width = cell_width.max(1);

    out.push_str("\n   ");
    for c in 0..columns {
        let _ = write!(out, " {:^width$}", c);
    }
    out.push('\n');

    let rule = format!("   {}\n", "-".repeat(columns * (width + 1) + 1));
    out.push_str(&rule);
    for (r, row) in matrix.iter().enumerate() {
        let _ = write!(out, "{:>2} |", r);
        for (c, &cell) in row.iter().enumerate() {
            let shown = if !valid(r, c) {
                " ".to_string()
            } else if hidden && cell != empty {
                "#".to_string()
            } else {
                cell.to_string()
            };
            let _ = write!(out, "{:^width$}|", shown);
        }
        out.push('\n');
        out.push_str(&rule);
    }
    out
}
