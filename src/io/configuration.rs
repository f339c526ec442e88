//! Crate constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Braiding settings
/// Fixed seed for reproducible braiding
pub const DEFAULT_SEED: u64 = 42;
/// Default fraction of dead ends to braid
pub const DEFAULT_BRAID_FRACTION: f64 = 0.5;

// Textual rendering glyphs
/// Glyph for a blocked cell
pub const BLOCKED_GLYPH: char = '#';
/// Glyph for a passable cell
pub const PASSABLE_GLYPH: char = '.';
/// Glyph for a cell on the rendered path
pub const PATH_GLYPH: char = '*';

/// Built-in 7x8 demonstration maze used when no layout file is given
pub const DEMO_LAYOUT: &str = "\
.#....#.
.#.##.#.
......#.
.######.
........
.#.####.
.#......
";
