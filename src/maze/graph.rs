use std::collections::VecDeque;

use super::cell::Direction;
use super::grid::Grid;

/// Undirected adjacency over all cells of a finished grid, with one edge per
/// open-wall adjacency.
///
/// Derived once after generation (or after loading a grid) and never mutated;
/// regenerating the maze rebuilds it from scratch. Kept as a plain adjacency
/// table since consumers only need membership and neighbor enumeration.
#[derive(Debug)]
pub struct ConnectivityGraph {
    adjacency: Vec<Vec<(u16, u16)>>,
    width: u16,
    height: u16,
}

impl ConnectivityGraph {
    /// Derives the graph from the grid's wall state. Deterministic for a
    /// fixed grid; neighbor lists are ordered N, E, S, W.
    pub fn build(grid: &Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut adjacency = Vec::with_capacity(grid.len());
        for y in 0..height {
            for x in 0..width {
                let neighbors = Direction::ALL
                    .into_iter()
                    .filter(|&d| grid.is_open((x, y), d))
                    .filter_map(|d| grid.neighbor_of((x, y), d))
                    .collect();
                adjacency.push(neighbors);
            }
        }
        ConnectivityGraph {
            adjacency,
            width,
            height,
        }
    }

    fn ravel_index(&self, coord: (u16, u16)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Whether the coordinate is a node of this graph.
    pub fn contains(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Cells connected to `coord` through an open wall. Empty for
    /// out-of-bounds coordinates.
    pub fn neighbors(&self, coord: (u16, u16)) -> &[(u16, u16)] {
        if self.contains(coord) {
            &self.adjacency[self.ravel_index(coord)]
        } else {
            &[]
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges. Every adjacency is recorded on both
    /// endpoints, so this is half the total degree.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether every cell is reachable from (0, 0).
    pub fn is_connected(&self) -> bool {
        if self.adjacency.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.adjacency.len()];
        let mut queue = VecDeque::from([(0u16, 0u16)]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(coord) = queue.pop_front() {
            for &neighbor in self.neighbors(coord) {
                let idx = self.ravel_index(neighbor);
                if !seen[idx] {
                    seen[idx] = true;
                    reached += 1;
                    queue.push_back(neighbor);
                }
            }
        }
        reached == self.adjacency.len()
    }
}
