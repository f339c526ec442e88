//! CLI entry point for the maze solver

use braidmaze::io::cli::{Cli, SolverRunner};
use clap::Parser;

fn main() -> braidmaze::Result<()> {
    let cli = Cli::parse();
    let runner = SolverRunner::new(cli);
    runner.run()
}
