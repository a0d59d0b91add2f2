use rand::rngs::StdRng;

use crate::maze::grid::Grid;
use crate::maze::portal::{Portal, PortalSet};

/// Places disjoint portal groups on interior cells.
///
/// Cells are sampled by row-major linear index, excluding index 0 and the
/// last index; with row-major indexing those are exactly the entrance (0, 0)
/// and the goal (W-1, H-1) on every grid shape. The requested number of sets
/// is clamped so the sample always fits in the remaining interior cells.
pub fn place_portals(grid: &Grid, sets: usize, set_size: usize, rng: &mut StdRng) -> PortalSet {
    debug_assert!(set_size >= 1);
    let interior = grid.len().saturating_sub(2);
    let sets = sets.min(interior / set_size);

    let mut portal_set = PortalSet::default();
    if sets == 0 {
        return portal_set;
    }

    // Sample over 0..interior, then shift by one to skip the entrance index.
    let sampled = rand::seq::index::sample(rng, interior, sets * set_size);
    let locations = sampled
        .iter()
        .map(|index| grid.unravel_index(index + 1))
        .collect::<Vec<_>>();

    for group in locations.chunks_exact(set_size) {
        portal_set.insert(Portal::new(group.to_vec()));
    }

    tracing::debug!(sets, set_size, "portals placed");
    portal_set
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn place(width: u16, height: u16, sets: usize, set_size: usize, seed: u64) -> PortalSet {
        let grid = Grid::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        place_portals(&grid, sets, set_size, &mut rng)
    }

    #[test]
    fn test_requested_count_and_size() {
        let portals = place(10, 10, 3, 2, 0);
        assert_eq!(portals.len(), 3);
        for portal in portals.iter() {
            assert_eq!(portal.locations().len(), 2);
        }
    }

    #[test]
    fn test_portals_are_disjoint() {
        let portals = place(10, 10, 5, 3, 1);
        let mut seen = HashSet::new();
        for portal in portals.iter() {
            for &location in portal.locations() {
                assert!(seen.insert(location), "cell {:?} reused", location);
            }
        }
    }

    #[test]
    fn test_entrance_and_goal_are_never_members() {
        for seed in 0..20 {
            let portals = place(4, 6, 11, 2, seed);
            assert!(!portals.is_portal((0, 0)));
            assert!(!portals.is_portal((3, 5)));
        }
    }

    #[test]
    fn test_count_is_clamped_to_interior() {
        // 3x3 grid: 7 interior cells, so at most 3 pair portals.
        let portals = place(3, 3, 100, 2, 2);
        assert_eq!(portals.len(), 3);
        // A 1x2 grid has no interior at all.
        let portals = place(1, 2, 1, 2, 3);
        assert!(portals.is_empty());
    }

    #[test]
    fn test_locations_are_in_bounds() {
        let portals = place(5, 7, 4, 2, 4);
        let grid = Grid::new(5, 7);
        for portal in portals.iter() {
            for &location in portal.locations() {
                assert!(grid.in_bounds(location));
            }
        }
    }
}
