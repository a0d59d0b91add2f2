use rand::{SeedableRng, rngs::StdRng};

mod backtrack;
mod loops;
mod portals;

use crate::maze::MazeConfig;
use crate::maze::grid::Grid;
use crate::maze::portal::PortalSet;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Runs the full generation pipeline for a validated config: spanning-tree
/// carve, then the optional loop-breaking and portal passes, all drawing from
/// one RNG so a fixed seed reproduces the whole maze.
pub(crate) fn generate(config: &MazeConfig) -> (Grid, PortalSet) {
    let mut rng = get_rng(config.seed);
    let mut grid = Grid::new(config.width, config.height);

    backtrack::carve_spanning_tree(&mut grid, &mut rng);

    if config.loops {
        loops::break_random_walls(&mut grid, config.loop_fraction, &mut rng);
    }

    let portal_set = if config.portal_sets > 0 {
        portals::place_portals(&grid, config.portal_sets, config.portal_set_size, &mut rng)
    } else {
        PortalSet::default()
    };

    tracing::debug!(
        width = config.width,
        height = config.height,
        portals = portal_set.len(),
        "maze generation finished"
    );

    (grid, portal_set)
}
