//! Grid state management and passability queries
//!
//! The grid stores one `CellState` per cell in row-major order and owns the
//! visited-cell register shared by all search strategies. Coordinates are
//! `[row, col]` pairs of `i32`; anything outside the grid is treated as
//! blocked for queries and ignored for mutation.

use ndarray::Array2;

use crate::collections::BalancedOrderedSet;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter};

/// Passability state of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Cell can be entered by a search
    #[default]
    Passable,
    /// Cell is a wall
    Blocked,
}

/// Fixed 4-neighbourhood scan order: up, right, down, left
///
/// The order determines which of several equal-length paths a search returns
/// and which wall a braiding step removes, so it must not change.
pub const NEIGHBOR_OFFSETS: [[i32; 2]; 4] = [[-1, 0], [0, 1], [1, 0], [0, -1]];

/// Maze grid with an owned visited-cell register
///
/// The register is a transient scratch structure for the search strategies in
/// [`crate::maze::pathfinding`]; its only public read surface is
/// [`MazeGrid::visited_count`]. Callers must not run two searches on the same
/// grid concurrently, the register is a single shared resource.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    cells: Array2<CellState>,
    visited: BalancedOrderedSet,
}

impl MazeGrid {
    /// Create a grid of the given dimensions with every cell passable
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), CellState::Passable),
            visited: BalancedOrderedSet::new(),
        }
    }

    /// Build a grid from explicit per-row cell states
    ///
    /// An empty layout yields a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::RaggedLayout`] when a row length differs from the
    /// first row, and [`MazeError::InvalidParameter`] when a dimension exceeds
    /// the configured maximum.
    pub fn from_layout(layout: &[Vec<CellState>]) -> Result<Self> {
        let rows = layout.len();
        let cols = layout.first().map_or(0, Vec::len);

        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "layout",
                &format!("{rows}x{cols}"),
                &format!("dimensions exceed the maximum of {MAX_GRID_DIMENSION}"),
            ));
        }

        for (row, cells) in layout.iter().enumerate() {
            if cells.len() != cols {
                return Err(MazeError::RaggedLayout {
                    row,
                    expected: cols,
                    actual: cells.len(),
                });
            }
        }

        let cells = Array2::from_shape_fn((rows, cols), |(r, c)| {
            layout
                .get(r)
                .and_then(|row| row.get(c))
                .copied()
                .unwrap_or(CellState::Blocked)
        });

        Ok(Self {
            cells,
            visited: BalancedOrderedSet::new(),
        })
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    fn state_at(&self, row: i32, col: i32) -> Option<CellState> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells.get([row as usize, col as usize]).copied()
    }

    /// Test whether a coordinate lies inside the grid
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        self.state_at(row, col).is_some()
    }

    /// Test whether a coordinate is inside the grid and not blocked
    pub fn is_passable(&self, row: i32, col: i32) -> bool {
        self.state_at(row, col) == Some(CellState::Passable)
    }

    /// Set the state of a cell, silently ignoring out-of-bounds coordinates
    pub fn set_cell(&mut self, row: i32, col: i32, state: CellState) {
        if row < 0 || col < 0 {
            return;
        }
        if let Some(cell) = self.cells.get_mut([row as usize, col as usize]) {
            *cell = state;
        }
    }

    /// Count the passable cells in the 4-neighbourhood of a coordinate
    pub fn passable_neighbor_count(&self, row: i32, col: i32) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|[dr, dc]| self.is_passable(row + dr, col + dc))
            .count()
    }

    /// Test whether a cell is a dead end: passable with exactly one passable
    /// neighbour
    pub fn is_dead_end(&self, row: i32, col: i32) -> bool {
        self.is_passable(row, col) && self.passable_neighbor_count(row, col) == 1
    }

    /// Count all dead ends currently in the grid
    pub fn dead_end_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                if self.is_dead_end(row, col) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of cells recorded in the visited register by the last search
    pub const fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Coordinates recorded in the visited register, in ascending key order
    pub fn visited_cells(&self) -> Vec<[i32; 2]> {
        self.visited.iter().map(|key| self.key_coord(key)).collect()
    }

    /// Bijective cell key for the visited register: `row * cols + col`
    pub(crate) fn coord_key(&self, coord: [i32; 2]) -> i64 {
        let [row, col] = coord;
        i64::from(row) * self.cols() as i64 + i64::from(col)
    }

    /// Recover the coordinate a key was built from
    pub(crate) fn key_coord(&self, key: i64) -> [i32; 2] {
        let cols = self.cols() as i64;
        if cols == 0 {
            return [0, 0];
        }
        [(key / cols) as i32, (key % cols) as i32]
    }

    /// Reset the visited register ahead of a fresh search
    pub(crate) fn clear_visited(&mut self) {
        self.visited.clear();
    }

    /// Record a cell as visited, returning whether it was new
    pub(crate) fn mark_visited(&mut self, coord: [i32; 2]) -> bool {
        let key = self.coord_key(coord);
        self.visited.insert(key)
    }

    /// Test whether a cell was already visited in the current search
    pub(crate) fn is_visited(&self, coord: [i32; 2]) -> bool {
        self.visited.contains(self.coord_key(coord))
    }
}
