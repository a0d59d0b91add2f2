use super::cell::{Direction, Walls};
use crate::error::ConfigError;

/// Row-major storage of per-cell wall state, plus the wall queries that need
/// to see both sides of a shared wall.
///
/// Mutable while a generator is carving; the owning [`Maze`](super::Maze)
/// only ever hands out shared references afterward.
#[derive(Debug)]
pub struct Grid {
    data: Box<[Walls]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid of the given dimensions with every wall intact.
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Walls::CLOSED; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Inverse of the row-major linear index. Index 0 is always (0, 0) and
    /// the last index is always (width-1, height-1), regardless of grid shape.
    pub fn unravel_index(&self, index: usize) -> (u16, u16) {
        (
            (index % self.width as usize) as u16,
            (index / self.width as usize) as u16,
        )
    }

    /// True iff the coordinate names a cell of this grid.
    pub fn in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// The adjacent cell one step away in `direction`, or `None` at the edge.
    pub fn neighbor_of(&self, coord: (u16, u16), direction: Direction) -> Option<(u16, u16)> {
        let (dx, dy) = direction.offset();
        let x = coord.0 as i32 + dx;
        let y = coord.1 as i32 + dy;
        if x >= 0 && y >= 0 && (x as u16) < self.width && (y as u16) < self.height {
            Some((x as u16, y as u16))
        } else {
            None
        }
    }

    /// Whether the wall of `coord` in `direction` is open.
    ///
    /// Carving sets the bit on only one side of a passage, so this ORs the
    /// cell's own bit with the neighbor's bit for the opposite direction.
    /// False whenever the neighbor (or `coord` itself) is out of bounds.
    pub fn is_open(&self, coord: (u16, u16), direction: Direction) -> bool {
        if !self.in_bounds(coord) {
            return false;
        }
        match self.neighbor_of(coord, direction) {
            Some(neighbor) => {
                self[coord].is_open(direction) || self[neighbor].is_open(direction.opposite())
            }
            None => false,
        }
    }

    /// Whether the wall of `coord` in `direction` could still be broken:
    /// the neighbor is in bounds and the wall is not already open.
    pub fn is_breakable(&self, coord: (u16, u16), direction: Direction) -> bool {
        self.in_bounds(coord)
            && self.neighbor_of(coord, direction).is_some()
            && !self.is_open(coord, direction)
    }

    /// The grid as rows of packed wall bits, outer index y, inner index x.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self[(x, y)].bits()).collect())
            .collect()
    }

    /// Rebuilds a grid from rows of packed wall bits. The rows must be
    /// non-empty and all of the same, non-zero length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ConfigError::MalformedGrid {
                reason: "grid must have at least one row and one column".into(),
            });
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(ConfigError::MalformedGrid {
                reason: "all rows must have the same length".into(),
            });
        }
        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(ConfigError::MalformedGrid {
                reason: "grid dimensions exceed the supported maximum".into(),
            });
        }
        let data = rows
            .iter()
            .flat_map(|row| row.iter().map(|&bits| Walls::from_bits(bits)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            data,
            width: width as u16,
            height: height as u16,
        })
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Walls;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(5, 3);
        assert!(grid.in_bounds((0, 0)));
        assert!(grid.in_bounds((4, 2)));
        assert!(!grid.in_bounds((5, 0)));
        assert!(!grid.in_bounds((0, 3)));
    }

    #[test]
    fn test_unravel_index_is_row_major() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.unravel_index(0), (0, 0));
        assert_eq!(grid.unravel_index(5), (1, 1));
        assert_eq!(grid.unravel_index(11), (3, 2));
    }

    #[test]
    fn test_neighbor_of_stops_at_edges() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbor_of((0, 0), Direction::North), None);
        assert_eq!(grid.neighbor_of((0, 0), Direction::West), None);
        assert_eq!(grid.neighbor_of((0, 0), Direction::East), Some((1, 0)));
        assert_eq!(grid.neighbor_of((2, 2), Direction::South), None);
    }

    #[test]
    fn test_is_open_ors_both_sides() {
        let mut grid = Grid::new(3, 3);
        // Open only the neighbor's side of the wall between (1,1) and (2,1).
        grid[(2, 1)] = grid[(2, 1)].open(Direction::West);
        assert!(grid.is_open((1, 1), Direction::East));
        assert!(grid.is_open((2, 1), Direction::West));
        // The one-sided bit never leaks to unrelated walls.
        assert!(!grid.is_open((1, 1), Direction::West));
        assert!(!grid.is_open((2, 1), Direction::East));
    }

    #[test]
    fn test_is_open_symmetry() {
        let mut grid = Grid::new(4, 4);
        grid[(1, 2)] = grid[(1, 2)].open(Direction::North);
        for y in 0..4u16 {
            for x in 0..4u16 {
                for direction in Direction::ALL {
                    if let Some(neighbor) = grid.neighbor_of((x, y), direction) {
                        assert_eq!(
                            grid.is_open((x, y), direction),
                            grid.is_open(neighbor, direction.opposite()),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_is_open_out_of_bounds_is_false() {
        let grid = Grid::new(2, 2);
        assert!(!grid.is_open((0, 0), Direction::North));
        assert!(!grid.is_open((9, 9), Direction::South));
    }

    #[test]
    fn test_is_breakable() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.is_breakable((1, 1), Direction::East));
        // Edge walls are never breakable.
        assert!(!grid.is_breakable((0, 0), Direction::West));
        // Already-open walls are not breakable again.
        grid[(1, 1)] = grid[(1, 1)].open(Direction::East);
        assert!(!grid.is_breakable((1, 1), Direction::East));
        assert!(!grid.is_breakable((2, 1), Direction::West));
    }

    #[test]
    fn test_rows_round_trip() {
        let mut grid = Grid::new(3, 2);
        grid[(0, 0)] = grid[(0, 0)].open(Direction::East);
        grid[(2, 1)] = grid[(2, 1)].open(Direction::North);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        let rebuilt = Grid::from_rows(&rows).unwrap();
        assert_eq!(rebuilt.to_rows(), rows);
        assert_eq!(rebuilt.width(), 3);
        assert_eq!(rebuilt.height(), 2);
    }

    #[test]
    fn test_from_rows_rejects_empty_and_ragged() {
        assert!(Grid::from_rows(&[]).is_err());
        assert!(Grid::from_rows(&[vec![]]).is_err());
        assert!(Grid::from_rows(&[vec![0, 0], vec![0]]).is_err());
    }
}
