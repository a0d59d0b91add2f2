pub mod cell;
pub mod graph;
pub mod grid;
pub mod portal;

use cell::{Direction, Walls};
use graph::ConnectivityGraph;
use grid::Grid;
use portal::{Portal, PortalSet};

use crate::error::ConfigError;
use crate::generators;

/// Generation parameters for [`Maze::generate`].
#[derive(Debug, Clone)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    /// Whether to run the loop-breaking pass after the spanning-tree carve.
    pub loops: bool,
    /// Target fraction of cells to sample for loop-breaking, in [0, 1].
    pub loop_fraction: f64,
    /// Number of portal groups to place. Zero disables portals.
    pub portal_sets: usize,
    /// Number of linked cells per portal group.
    pub portal_set_size: usize,
    /// Fixed RNG seed for reproducible generation; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            loops: false,
            loop_fraction: 0.5,
            portal_sets: 0,
            portal_set_size: 2,
            seed: None,
        }
    }
}

impl MazeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.loop_fraction) {
            return Err(ConfigError::InvalidLoopFraction(self.loop_fraction));
        }
        if self.portal_set_size == 0 {
            return Err(ConfigError::InvalidPortalSetSize);
        }
        Ok(())
    }
}

/// Outcome of a movement request. Blocked moves are a normal result, not an
/// error; `cell` is then the unchanged occupant location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub cell: (u16, u16),
}

/// A finished maze: the immutable cell grid, the portals placed during
/// generation, and the connectivity graph derived from the wall state.
///
/// Regeneration builds a whole new `Maze`; a consumer swapping the value
/// replaces grid, graph, and portals as a unit and can never observe a
/// partially rebuilt maze.
#[derive(Debug)]
pub struct Maze {
    grid: Grid,
    portals: PortalSet,
    graph: ConnectivityGraph,
}

impl Maze {
    /// Generates a random maze from the given configuration.
    pub fn generate(config: &MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (grid, portals) = generators::generate(config);
        let graph = ConnectivityGraph::build(&grid);
        Ok(Maze {
            grid,
            portals,
            graph,
        })
    }

    /// Rebuilds a maze from rows of packed wall bits, as produced by
    /// [`Maze::to_rows`] or loaded from disk.
    ///
    /// Portals are a generation-time concept and are not part of the stored
    /// grid, so the result always has an empty portal set.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ConfigError> {
        let grid = Grid::from_rows(rows)?;
        let graph = ConnectivityGraph::build(&grid);
        Ok(Maze {
            grid,
            portals: PortalSet::default(),
            graph,
        })
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// The conventional starting cell.
    pub fn entrance(&self) -> (u16, u16) {
        (0, 0)
    }

    /// The conventional goal cell, diagonally opposite the entrance.
    pub fn goal(&self) -> (u16, u16) {
        (self.grid.width() - 1, self.grid.height() - 1)
    }

    /// The raw wall state of one cell. Note this is one cell's own bits;
    /// use [`Maze::is_open`] to query a shared wall.
    pub fn walls_open(&self, cell: (u16, u16)) -> Walls {
        self.grid[cell]
    }

    pub fn in_bounds(&self, cell: (u16, u16)) -> bool {
        self.grid.in_bounds(cell)
    }

    /// Whether the wall of `cell` in `direction` is open. See
    /// [`Grid::is_open`] for the two-sided query semantics.
    pub fn is_open(&self, cell: (u16, u16), direction: Direction) -> bool {
        self.grid.is_open(cell, direction)
    }

    /// Whether the wall of `cell` in `direction` is still intact and shared
    /// with an in-bounds neighbor.
    pub fn is_breakable(&self, cell: (u16, u16), direction: Direction) -> bool {
        self.grid.is_breakable(cell, direction)
    }

    pub fn is_portal(&self, cell: (u16, u16)) -> bool {
        self.portals.is_portal(cell)
    }

    pub fn portal_at(&self, cell: (u16, u16)) -> Option<&Portal> {
        self.portals.portal_at(cell)
    }

    pub fn portals(&self) -> impl Iterator<Item = &Portal> {
        self.portals.iter()
    }

    /// The derived connectivity graph, for consumers running reachability or
    /// shortest-path queries on top of the public edge set.
    pub fn graph(&self) -> &ConnectivityGraph {
        &self.graph
    }

    /// In-bounds cells connected to `cell` by an open wall.
    pub fn neighbors(&self, cell: (u16, u16)) -> &[(u16, u16)] {
        self.graph.neighbors(cell)
    }

    /// Attempts to move an occupant one step in `direction`.
    ///
    /// The move succeeds iff the wall is open; the destination is then
    /// resolved through any portal occupying it. A blocked or out-of-bounds
    /// move reports `moved: false` with the occupant unmoved.
    pub fn attempt_move(&self, occupant: (u16, u16), direction: Direction) -> MoveOutcome {
        if !self.grid.is_open(occupant, direction) {
            return MoveOutcome {
                moved: false,
                cell: occupant,
            };
        }
        // is_open already established the neighbor is in bounds.
        let mut destination = self
            .grid
            .neighbor_of(occupant, direction)
            .unwrap_or(occupant);
        if let Some(portal) = self.portals.portal_at(destination) {
            destination = portal.teleport(destination);
        }
        MoveOutcome {
            moved: true,
            cell: destination,
        }
    }

    /// The grid as rows of packed wall bits, outer index y, inner index x.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.grid.to_rows()
    }
}
