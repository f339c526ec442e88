//! Input/output surface of the maze solver
//!
//! This module contains the user-facing plumbing:
//! - Error types shared across the crate
//! - Named constants and defaults
//! - Textual maze parsing and rendering
//! - The command-line interface and its runner

/// Command-line interface and solver runner
pub mod cli;
/// Crate constants and runtime configuration defaults
pub mod configuration;
/// Error types for maze construction, parsing, and solving
pub mod error;
/// Textual maze rendering and layout parsing
pub mod render;
