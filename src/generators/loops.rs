use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Opens extra walls after the spanning-tree carve to introduce cycles.
///
/// Samples `round(W*H*fraction)` distinct cells; for each, scans its four
/// directions in random order and opens the first breakable wall, on the
/// sampled cell's own side. A cell contributes nothing if all its walls are
/// already open or out of bounds, so the pass adds at most one edge per
/// sampled cell.
pub fn break_random_walls(grid: &mut Grid, fraction: f64, rng: &mut StdRng) {
    let total = grid.len();
    let count = ((total as f64) * fraction).round() as usize;
    if count == 0 {
        return;
    }

    let mut broken = 0usize;
    for index in rand::seq::index::sample(rng, total, count.min(total)) {
        let cell = grid.unravel_index(index);
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        for direction in directions {
            if grid.is_breakable(cell, direction) {
                grid[cell] = grid[cell].open(direction);
                broken += 1;
                break;
            }
        }
    }

    tracing::debug!(sampled = count, broken, "loop-breaking pass finished");
}
