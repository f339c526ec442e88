//! Search strategies over the maze grid
//!
//! All three strategies take start and end coordinates and return the path as
//! a sequence of cells, or an empty sequence when either endpoint is invalid
//! or the target is unreachable. Neighbours are always explored in the fixed
//! order up, right, down, left, which pins down exactly which of several
//! equal-length paths is returned.
//!
//! Every strategy clears the grid's visited register on entry, so repeated
//! calls on an unchanged maze return identical results.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::maze::grid::{MazeGrid, NEIGHBOR_OFFSETS};

/// Test that both endpoints are inside the grid and passable
fn endpoints_passable(grid: &MazeGrid, start: [i32; 2], end: [i32; 2]) -> bool {
    grid.is_passable(start[0], start[1]) && grid.is_passable(end[0], end[1])
}

/// Breadth-first search returning a shortest path from `start` to `end`
///
/// Queue entries carry the full path so far, trading memory for a trivial
/// reconstruction step. Cells are marked visited when enqueued, never when
/// dequeued, so no cell enters the queue twice.
pub fn find_path_bfs(grid: &mut MazeGrid, start: [i32; 2], end: [i32; 2]) -> Vec<[i32; 2]> {
    if !endpoints_passable(grid, start, end) {
        return Vec::new();
    }

    grid.clear_visited();

    let mut queue: VecDeque<([i32; 2], Vec<[i32; 2]>)> = VecDeque::new();
    queue.push_back((start, vec![start]));
    grid.mark_visited(start);

    while let Some(([row, col], path)) = queue.pop_front() {
        if [row, col] == end {
            return path;
        }

        for [dr, dc] in NEIGHBOR_OFFSETS {
            let next = [row + dr, col + dc];
            if grid.is_passable(next[0], next[1]) && !grid.is_visited(next) {
                grid.mark_visited(next);
                let mut extended = path.clone();
                extended.push(next);
                queue.push_back((next, extended));
            }
        }
    }

    Vec::new()
}

/// Depth-first search returning the first path found from `start` to `end`
///
/// The returned path is valid but not necessarily shortest. Cells are marked
/// visited on entry and popped from the path when no neighbour leads to the
/// target.
pub fn find_path_dfs(grid: &mut MazeGrid, start: [i32; 2], end: [i32; 2]) -> Vec<[i32; 2]> {
    if !endpoints_passable(grid, start, end) {
        return Vec::new();
    }

    grid.clear_visited();

    let mut path = Vec::new();
    if dfs_visit(grid, start, end, &mut path) {
        return path;
    }
    Vec::new()
}

fn dfs_visit(grid: &mut MazeGrid, current: [i32; 2], end: [i32; 2], path: &mut Vec<[i32; 2]>) -> bool {
    grid.mark_visited(current);
    path.push(current);

    if current == end {
        return true;
    }

    for [dr, dc] in NEIGHBOR_OFFSETS {
        let next = [current[0] + dr, current[1] + dc];
        if grid.is_passable(next[0], next[1])
            && !grid.is_visited(next)
            && dfs_visit(grid, next, end, path)
        {
            return true;
        }
    }

    // Backtrack: nothing beyond this cell reaches the target
    path.pop();
    false
}

/// Wave propagation returning a shortest path from `start` to `end`
///
/// Propagates a distance front from the start, recording each newly reached
/// cell's distance and predecessor, and stops as soon as the target is
/// dequeued. The distance array's -1 sentinel is the membership check; the
/// visited register is additionally filled with every reached cell so
/// [`MazeGrid::visited_count`] reflects the extent of the wave afterwards.
pub fn find_path_wave(grid: &mut MazeGrid, start: [i32; 2], end: [i32; 2]) -> Vec<[i32; 2]> {
    if !endpoints_passable(grid, start, end) {
        return Vec::new();
    }

    grid.clear_visited();

    let shape = (grid.rows(), grid.cols());
    let mut distances: Array2<i32> = Array2::from_elem(shape, -1);
    let mut parents: Array2<[i32; 2]> = Array2::from_elem(shape, [-1, -1]);

    let mut queue: VecDeque<[i32; 2]> = VecDeque::new();
    if let Some(distance) = distances.get_mut([start[0] as usize, start[1] as usize]) {
        *distance = 0;
    }
    queue.push_back(start);

    let mut found = false;
    while let Some([row, col]) = queue.pop_front() {
        if [row, col] == end {
            found = true;
            break;
        }

        let current_distance = distances
            .get([row as usize, col as usize])
            .copied()
            .unwrap_or(0);

        for [dr, dc] in NEIGHBOR_OFFSETS {
            let next = [row + dr, col + dc];
            if !grid.is_passable(next[0], next[1]) {
                continue;
            }
            let index = [next[0] as usize, next[1] as usize];
            if distances.get(index).copied() == Some(-1) {
                if let Some(distance) = distances.get_mut(index) {
                    *distance = current_distance + 1;
                }
                if let Some(parent) = parents.get_mut(index) {
                    *parent = [row, col];
                }
                queue.push_back(next);
                grid.mark_visited(next);
            }
        }
    }

    if !found {
        return Vec::new();
    }

    // Walk predecessors back from the target, then flip into path order
    let mut path = Vec::new();
    let mut current = end;
    while current != start {
        path.push(current);
        current = parents
            .get([current[0] as usize, current[1] as usize])
            .copied()
            .unwrap_or(start);
    }
    path.push(start);
    path.reverse();
    path
}
