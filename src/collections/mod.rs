//! Ordered collections backing the maze solver
//!
//! The visited-cell register and the path overlay used during rendering are
//! both instances of the AVL-balanced set defined here.

/// Self-balancing ordered set of integer keys
pub mod avl_set;

pub use avl_set::BalancedOrderedSet;
