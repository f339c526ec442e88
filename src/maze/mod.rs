//! Maze grid state, pathfinding strategies, and braiding
//!
//! This module contains the maze-related functionality:
//! - Grid storage and passability queries
//! - Breadth-first, depth-first, and wave-propagation pathfinding
//! - Dead-end detection and braiding

/// Dead-end detection and wall removal
pub mod braiding;
/// Grid state management and passability queries
pub mod grid;
/// Search strategies over the maze grid
pub mod pathfinding;

pub use grid::{CellState, MazeGrid};
