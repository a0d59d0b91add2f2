//! Disk persistence for the cell grid.
//!
//! Only the wall bits are stored, as a dense row-major 2D array; dimensions
//! are recovered from the stored shape. Portals and the connectivity graph
//! are not persisted, so loading always yields a maze with an empty portal
//! set and a freshly derived graph.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::maze::Maze;

/// On-disk representation: rows of packed wall bits, outer index y.
#[derive(Serialize, Deserialize)]
struct StoredGrid {
    cells: Vec<Vec<u8>>,
}

/// Saves the maze's wall grid as JSON.
pub fn save_grid<P: AsRef<Path>>(maze: &Maze, path: P) -> Result<(), StorageError> {
    let stored = StoredGrid {
        cells: maze.to_rows(),
    };
    fs::write(path.as_ref(), serde_json::to_string(&stored)?)?;
    tracing::info!(path = %path.as_ref().display(), "saved maze grid");
    Ok(())
}

/// Loads a wall grid saved by [`save_grid`] and rebuilds a maze from it.
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<Maze, StorageError> {
    let stored: StoredGrid = serde_json::from_str(&fs::read_to_string(path.as_ref())?)?;
    let maze = Maze::from_rows(&stored.cells)?;
    tracing::info!(
        path = %path.as_ref().display(),
        width = maze.width(),
        height = maze.height(),
        "loaded maze grid"
    );
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeConfig;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("mazekit-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_save_load_round_trip() {
        let config = MazeConfig {
            width: 5,
            height: 7,
            loops: true,
            loop_fraction: 0.2,
            portal_sets: 1,
            seed: Some(21),
            ..MazeConfig::default()
        };
        let maze = Maze::generate(&config).unwrap();
        let path = temp_path("round-trip");
        save_grid(&maze, &path).unwrap();
        let loaded = load_maze(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.to_rows(), maze.to_rows());
        assert_eq!(loaded.width(), 5);
        assert_eq!(loaded.height(), 7);
        // Portals are generation-time only.
        assert!(loaded.portals().next().is_none());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_maze(temp_path("does-not-exist"));
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_load_malformed_json_is_format_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();
        let result = load_maze(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(StorageError::Format(_))));
    }

    #[test]
    fn test_load_ragged_grid_is_config_error() {
        let path = temp_path("ragged");
        fs::write(&path, r#"{"cells":[[0,1],[2]]}"#).unwrap();
        let result = load_maze(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(StorageError::Config(_))));
    }
}
