//! Textual maze rendering and layout parsing
//!
//! A maze is rendered one row per line with `#` for blocked cells, `.` for
//! passable cells, and `*` for cells on a path overlay. Parsing accepts the
//! same format, so render and parse round-trip.

use crate::collections::BalancedOrderedSet;
use crate::io::configuration::{BLOCKED_GLYPH, PASSABLE_GLYPH, PATH_GLYPH};
use crate::io::error::{MazeError, Result, invalid_layout};
use crate::maze::grid::{CellState, MazeGrid};

/// Render the grid without a path overlay
pub fn render(grid: &MazeGrid) -> String {
    render_with_path(grid, &[])
}

/// Render the grid with the given path cells marked
///
/// The path is loaded into an ordered set keyed by cell so each rendered cell
/// is a single membership probe.
pub fn render_with_path(grid: &MazeGrid, path: &[[i32; 2]]) -> String {
    let path_cells: BalancedOrderedSet = path.iter().map(|&coord| grid.coord_key(coord)).collect();

    let mut output = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let glyph = if path_cells.contains(grid.coord_key([row, col])) {
                PATH_GLYPH
            } else if grid.is_passable(row, col) {
                PASSABLE_GLYPH
            } else {
                BLOCKED_GLYPH
            };
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}

/// Parse a textual maze layout into a grid
///
/// Trailing whitespace and blank lines are ignored; every remaining line is
/// one grid row.
///
/// # Errors
///
/// Returns [`MazeError::InvalidLayout`] for an empty layout,
/// [`MazeError::UnknownGlyph`] for characters other than `#` and `.`, and
/// [`MazeError::RaggedLayout`] when line lengths differ.
pub fn parse_layout(text: &str) -> Result<MazeGrid> {
    let mut layout: Vec<Vec<CellState>> = Vec::new();

    for (row, line) in text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let mut cells = Vec::with_capacity(line.len());
        for (col, glyph) in line.chars().enumerate() {
            let state = match glyph {
                BLOCKED_GLYPH => CellState::Blocked,
                PASSABLE_GLYPH => CellState::Passable,
                _ => return Err(MazeError::UnknownGlyph { row, col, glyph }),
            };
            cells.push(state);
        }
        layout.push(cells);
    }

    if layout.is_empty() {
        return Err(invalid_layout(&"layout contains no rows"));
    }

    MazeGrid::from_layout(&layout)
}
