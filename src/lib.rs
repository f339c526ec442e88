//! Grid maze solver with an AVL-backed visited register and dead-end braiding
//!
//! The crate pairs a self-balancing ordered set with a family of maze search
//! strategies that use it to track visited cells, plus a braiding pass that
//! opens walls next to dead ends to introduce loops.

#![forbid(unsafe_code)]

/// Ordered collections, currently the AVL-balanced integer set
pub mod collections;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Maze grid state, pathfinding strategies, and braiding
pub mod maze;

pub use io::error::{MazeError, Result};
