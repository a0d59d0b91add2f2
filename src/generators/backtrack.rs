use rand::{Rng, rngs::StdRng};

use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Carves a spanning tree over the grid with a randomized backtracking walk.
///
/// An explicit stack replaces call-stack recursion so large grids cannot blow
/// the stack. Each carve opens the bit on the neighbor's side only; queries
/// going through [`Grid::is_open`] compensate by ORing both sides.
///
/// Visited cells are tracked in a separate bitmap rather than by "any wall
/// open": the start cell never gets a bit of its own, and treating it as
/// unvisited would let a later carve reconnect to it and create a cycle.
pub fn carve_spanning_tree(grid: &mut Grid, rng: &mut StdRng) {
    if grid.is_empty() {
        return;
    }

    let width = grid.width();
    let height = grid.height();

    let start = (rng.random_range(0..width), rng.random_range(0..height));
    let mut visited = vec![false; grid.len()];
    visited[start.1 as usize * width as usize + start.0 as usize] = true;

    // The stack holds the current carving path; the top is the active cell.
    let mut stack = vec![start];
    let mut carved = 0usize;

    while let Some(&cell) = stack.last() {
        let candidates = Direction::ALL
            .into_iter()
            .filter_map(|d| grid.neighbor_of(cell, d).map(|n| (d, n)))
            .filter(|&(_, n)| !visited[n.1 as usize * width as usize + n.0 as usize])
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            // Dead end: backtrack.
            stack.pop();
            continue;
        }

        let (direction, neighbor) = candidates[rng.random_range(0..candidates.len())];
        // Knock down the shared wall, recording it on the neighbor's side.
        grid[neighbor] = grid[neighbor].open(direction.opposite());
        visited[neighbor.1 as usize * width as usize + neighbor.0 as usize] = true;
        carved += 1;
        stack.push(neighbor);
    }

    tracing::debug!(?start, carved, "spanning tree carved");
}
