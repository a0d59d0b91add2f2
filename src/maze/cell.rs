use std::fmt;

/// A compass direction. The set is closed; there is no way to name a fifth
/// direction, so direction arguments never need runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset of one step in this direction, in (dx, dy) with y growing
    /// downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The opposite direction. Involutive: `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Bit assigned to this direction in the packed wall state.
    fn bit(self) -> u8 {
        match self {
            Direction::North => 0x1,
            Direction::East => 0x2,
            Direction::South => 0x4,
            Direction::West => 0x8,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        write!(f, "{}", symbol)
    }
}

/// Per-cell wall state packed into the low four bits of a byte.
///
/// A set bit means the wall in that direction is open (passable); zero means
/// all four walls are intact. Carving only ever sets the bit on one side of a
/// shared wall, so "is this wall open" must OR both sides; that query lives on
/// [`Grid`](super::grid::Grid), which sees both cells.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    /// All four walls intact.
    pub const CLOSED: Walls = Walls(0);

    /// Reconstructs a wall state from its packed bits. Bits above the low
    /// four are dropped, so any byte loaded from disk is acceptable.
    pub fn from_bits(bits: u8) -> Self {
        Walls(bits & 0xF)
    }

    /// The packed bit representation, as stored on disk.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether this cell's own bit for `direction` is set.
    pub fn is_open(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// True iff no wall has been opened yet.
    pub fn all_intact(self) -> bool {
        self.0 == 0
    }

    /// Returns the state with the wall in `direction` opened. Idempotent.
    #[must_use]
    pub fn open(self, direction: Direction) -> Self {
        Walls(self.0 | direction.bit())
    }

    /// The directions whose walls are open on this cell's side.
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involutive() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_bit_layout_matches_storage_format() {
        assert_eq!(Walls::CLOSED.open(Direction::North).bits(), 0x1);
        assert_eq!(Walls::CLOSED.open(Direction::East).bits(), 0x2);
        assert_eq!(Walls::CLOSED.open(Direction::South).bits(), 0x4);
        assert_eq!(Walls::CLOSED.open(Direction::West).bits(), 0x8);
    }

    #[test]
    fn test_open_is_idempotent() {
        let once = Walls::CLOSED.open(Direction::East);
        assert_eq!(once.open(Direction::East), once);
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        let walls = Walls::from_bits(0xF3);
        assert_eq!(walls.bits(), 0x3);
        assert!(walls.is_open(Direction::North));
        assert!(walls.is_open(Direction::East));
        assert!(!walls.is_open(Direction::South));
    }

    #[test]
    fn test_all_intact() {
        assert!(Walls::CLOSED.all_intact());
        assert!(!Walls::CLOSED.open(Direction::West).all_intact());
    }

    #[test]
    fn test_open_directions_enumeration() {
        let walls = Walls::CLOSED.open(Direction::North).open(Direction::South);
        let open: Vec<_> = walls.open_directions().collect();
        assert_eq!(open, vec![Direction::North, Direction::South]);
    }
}
