//! Command-line interface for solving and braiding textual mazes

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use crate::io::configuration::{DEFAULT_SEED, DEMO_LAYOUT};
use crate::io::error::{MazeError, Result};
use crate::io::render::{parse_layout, render_with_path};
use crate::maze::braiding::Braider;
use crate::maze::grid::MazeGrid;
use crate::maze::pathfinding::{find_path_bfs, find_path_dfs, find_path_wave};

/// Search strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Breadth-first search (shortest path, path carried per queue entry)
    Bfs,
    /// Depth-first search (first path found, not necessarily shortest)
    Dfs,
    /// Wave propagation (shortest path via distance and parent maps)
    Wave,
}

#[derive(Parser)]
#[command(name = "braidmaze")]
#[command(
    author,
    version,
    about = "Solve grid mazes with multiple search strategies and optional braiding"
)]
/// Command-line arguments for the maze solver
pub struct Cli {
    /// Maze layout file ('#' blocked, '.' passable); built-in demo when omitted
    #[arg(value_name = "MAZE")]
    pub maze: Option<PathBuf>,

    /// Search strategy to run
    #[arg(short = 't', long, value_enum, default_value = "wave")]
    pub strategy: Strategy,

    /// Start coordinate as row,col (defaults to the top-left cell)
    #[arg(long, value_parser = parse_coordinate)]
    pub start: Option<[i32; 2]>,

    /// End coordinate as row,col (defaults to the bottom-right cell)
    #[arg(long, value_parser = parse_coordinate)]
    pub end: Option<[i32; 2]>,

    /// Braid this fraction of dead ends before solving
    #[arg(short, long, value_name = "FRACTION")]
    pub braid: Option<f64>,

    /// Random seed for reproducible braiding
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress all output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse a `row,col` argument into a coordinate
fn parse_coordinate(value: &str) -> std::result::Result<[i32; 2], String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'row,col', got '{value}'"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad row '{row}': {err}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad column '{col}': {err}"))?;
    Ok([row, col])
}

/// Loads the maze, applies braiding, runs the selected search, and reports
pub struct SolverRunner {
    cli: Cli,
}

impl SolverRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the full solve pipeline
    ///
    /// # Errors
    ///
    /// Returns an error when the maze file cannot be read or parsed, or when
    /// the braid fraction is invalid. An unreachable target is reported as a
    /// normal outcome, not an error.
    pub fn run(&self) -> Result<()> {
        let mut grid = self.load_grid()?;

        let start = self.cli.start.unwrap_or([0, 0]);
        let end = self.cli.end.unwrap_or([
            grid.rows().saturating_sub(1) as i32,
            grid.cols().saturating_sub(1) as i32,
        ]);

        if let Some(fraction) = self.cli.braid {
            let mut braider = Braider::new(self.cli.seed);
            let removed = braider.braid(&mut grid, fraction)?;
            self.report(&format!("Braiding removed {removed} walls"));
        }

        let path = match self.cli.strategy {
            Strategy::Bfs => find_path_bfs(&mut grid, start, end),
            Strategy::Dfs => find_path_dfs(&mut grid, start, end),
            Strategy::Wave => find_path_wave(&mut grid, start, end),
        };

        self.report(&render_with_path(&grid, &path));
        if path.is_empty() {
            self.report(&format!(
                "No path from {},{} to {},{}",
                start[0], start[1], end[0], end[1]
            ));
        } else {
            self.report(&format!("Path length: {} cells", path.len()));
        }
        self.report(&format!(
            "Visited cells: {} of {} ({} dead ends)",
            grid.visited_count(),
            grid.rows() * grid.cols(),
            grid.dead_end_count()
        ));

        Ok(())
    }

    fn load_grid(&self) -> Result<MazeGrid> {
        match &self.cli.maze {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| MazeError::FileSystem {
                    path: path.clone(),
                    operation: "read",
                    source,
                })?;
                parse_layout(&text)
            }
            None => parse_layout(DEMO_LAYOUT),
        }
    }

    #[allow(clippy::print_stdout)]
    fn report(&self, message: &str) {
        if !self.cli.quiet {
            println!("{message}");
        }
    }
}
