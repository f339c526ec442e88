//! Validates maze text parsing, rendering, and the CLI runner

use braidmaze::MazeError;
use braidmaze::io::cli::{Cli, SolverRunner, Strategy};
use braidmaze::io::configuration::DEMO_LAYOUT;
use braidmaze::io::render::{parse_layout, render, render_with_path};
use braidmaze::maze::pathfinding::find_path_bfs;
use std::io::Write;

#[test]
fn test_parse_render_round_trip() {
    let grid = match parse_layout(DEMO_LAYOUT) {
        Ok(grid) => grid,
        Err(err) => unreachable!("demo layout must parse: {err}"),
    };

    assert_eq!(grid.rows(), 7);
    assert_eq!(grid.cols(), 8);
    assert_eq!(render(&grid), DEMO_LAYOUT);
}

#[test]
fn test_parse_rejects_unknown_glyph() {
    let result = parse_layout("..X.\n....");
    assert!(matches!(
        result,
        Err(MazeError::UnknownGlyph {
            row: 0,
            col: 2,
            glyph: 'X'
        })
    ));
}

#[test]
fn test_parse_rejects_ragged_lines() {
    let result = parse_layout(".#.\n..");
    assert!(matches!(
        result,
        Err(MazeError::RaggedLayout {
            row: 1,
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_parse_rejects_empty_input() {
    for text in ["", "\n", "  \n  \n"] {
        assert!(matches!(
            parse_layout(text),
            Err(MazeError::InvalidLayout { .. })
        ));
    }
}

#[test]
fn test_render_marks_path_cells() {
    let mut grid = match parse_layout(DEMO_LAYOUT) {
        Ok(grid) => grid,
        Err(err) => unreachable!("demo layout must parse: {err}"),
    };

    let path = find_path_bfs(&mut grid, [0, 0], [6, 7]);
    assert!(!path.is_empty());

    let rendered = render_with_path(&grid, &path);
    let stars = rendered.chars().filter(|&glyph| glyph == '*').count();
    assert_eq!(stars, path.len());

    // An empty overlay renders the bare maze
    assert_eq!(render_with_path(&grid, &[]), DEMO_LAYOUT);
}

#[test]
fn test_runner_solves_maze_from_file() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(err) => unreachable!("tempfile creation failed: {err}"),
    };
    assert!(file.write_all(DEMO_LAYOUT.as_bytes()).is_ok());

    let cli = Cli {
        maze: Some(file.path().to_path_buf()),
        strategy: Strategy::Bfs,
        start: None,
        end: None,
        braid: Some(0.5),
        seed: 42,
        quiet: true,
    };

    let runner = SolverRunner::new(cli);
    assert!(runner.run().is_ok());
}

#[test]
fn test_runner_reports_missing_file() {
    let cli = Cli {
        maze: Some("does-not-exist.maze".into()),
        strategy: Strategy::Wave,
        start: None,
        end: None,
        braid: None,
        seed: 42,
        quiet: true,
    };

    let runner = SolverRunner::new(cli);
    assert!(matches!(
        runner.run(),
        Err(MazeError::FileSystem { operation: "read", .. })
    ));
}
