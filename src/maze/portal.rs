use std::collections::HashMap;

/// An ordered group of linked cells. Stepping onto any member moves the
/// occupant to the next member, cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portal {
    locations: Vec<(u16, u16)>,
}

impl Portal {
    /// Builds a portal over the given locations, in teleport order.
    pub fn new(locations: Vec<(u16, u16)>) -> Self {
        debug_assert!(!locations.is_empty(), "a portal needs at least one location");
        Portal { locations }
    }

    pub fn locations(&self) -> &[(u16, u16)] {
        &self.locations
    }

    /// The next location in the cycle after `cell`. Callers must only pass a
    /// member cell; a non-member is returned unchanged.
    pub fn teleport(&self, cell: (u16, u16)) -> (u16, u16) {
        match self.locations.iter().position(|&location| location == cell) {
            Some(index) => self.locations[(index + 1) % self.locations.len()],
            None => {
                debug_assert!(false, "teleport called on non-member cell {:?}", cell);
                cell
            }
        }
    }
}

/// All portals of a maze plus a reverse index from member cell to portal,
/// for O(1) membership queries during movement.
///
/// Portals exist only on freshly generated mazes; a maze rebuilt from a saved
/// grid always carries an empty set.
#[derive(Debug, Default)]
pub struct PortalSet {
    portals: Vec<Portal>,
    index: HashMap<(u16, u16), usize>,
}

impl PortalSet {
    /// Adds a portal. Its locations must be disjoint from every portal
    /// already in the set.
    pub fn insert(&mut self, portal: Portal) {
        let slot = self.portals.len();
        for &location in portal.locations() {
            let previous = self.index.insert(location, slot);
            debug_assert!(previous.is_none(), "cell {:?} already belongs to a portal", location);
        }
        self.portals.push(portal);
    }

    pub fn is_portal(&self, cell: (u16, u16)) -> bool {
        self.index.contains_key(&cell)
    }

    pub fn portal_at(&self, cell: (u16, u16)) -> Option<&Portal> {
        self.index.get(&cell).map(|&slot| &self.portals[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Portal> {
        self.portals.iter()
    }

    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }
}
