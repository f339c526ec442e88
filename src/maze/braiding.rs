//! Dead-end detection and wall removal
//!
//! Braiding removes a configurable fraction of the walls adjacent to dead
//! ends, turning corridors that stop short into loops. Which dead ends are
//! processed is decided by a seeded shuffle, so runs with the same seed on
//! the same maze are reproducible.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::io::error::{Result, invalid_parameter};
use crate::maze::grid::{CellState, MazeGrid, NEIGHBOR_OFFSETS};

/// Dead-end braiding pass with a seeded random source
pub struct Braider {
    rng: StdRng,
}

impl Braider {
    /// Create a braider with a deterministic shuffle seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Scan the whole grid for dead ends, in row-major order
    pub fn find_dead_ends(grid: &MazeGrid) -> Vec<[i32; 2]> {
        let mut dead_ends = Vec::new();
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                if grid.is_dead_end(row, col) {
                    dead_ends.push([row, col]);
                }
            }
        }
        dead_ends
    }

    /// Braid `fraction` of the grid's dead ends, returning the number of
    /// walls removed
    ///
    /// The dead-end list is shuffled and the first `floor(fraction * count)`
    /// entries are processed; each removes at most one adjacent wall. A dead
    /// end whose neighbourhood offers no removable wall is left unchanged, so
    /// the return value can be smaller than the processed count.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidParameter`] when `fraction` is not
    /// a finite value in `[0, 1]`.
    pub fn braid(&mut self, grid: &mut MazeGrid, fraction: f64) -> Result<usize> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(invalid_parameter(
                "fraction",
                &fraction,
                &"must be a finite value in [0, 1]",
            ));
        }

        let mut dead_ends = Self::find_dead_ends(grid);
        dead_ends.shuffle(&mut self.rng);

        let take = (fraction * dead_ends.len() as f64).floor() as usize;
        let mut removed = 0;
        for &[row, col] in dead_ends.iter().take(take) {
            if open_wall_near(grid, row, col) {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Try to remove one wall next to a dead end
///
/// The first neighbouring wall (in fixed scan order) that would end up with
/// one or two passable neighbours of its own is opened; walls that would
/// join three or more passages are skipped to avoid carving open rooms.
fn open_wall_near(grid: &mut MazeGrid, row: i32, col: i32) -> bool {
    for [dr, dc] in NEIGHBOR_OFFSETS {
        let (wall_row, wall_col) = (row + dr, col + dc);
        if !grid.is_valid(wall_row, wall_col) || grid.is_passable(wall_row, wall_col) {
            continue;
        }

        let connections = grid.passable_neighbor_count(wall_row, wall_col);
        if (1..=2).contains(&connections) {
            grid.set_cell(wall_row, wall_col, CellState::Passable);
            return true;
        }
    }
    false
}
