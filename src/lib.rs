//! Procedural rectangular maze generation with controllable connectivity.
//!
//! The crate generates a perfect maze with a randomized spanning-tree carve,
//! optionally punches extra openings to introduce cycles, and optionally
//! places portal groups that teleport an occupant between linked cells. The
//! finished [`Maze`] exposes read-only wall queries, a derived connectivity
//! graph, and a movement API for grid-world consumers.

pub mod error;
mod generators;
pub mod maze;
pub mod storage;

pub use error::{ConfigError, StorageError};
pub use maze::cell::{Direction, Walls};
pub use maze::graph::ConnectivityGraph;
pub use maze::portal::{Portal, PortalSet};
pub use maze::{Maze, MazeConfig, MoveOutcome};
