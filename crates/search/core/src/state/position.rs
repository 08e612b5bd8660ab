use std::fmt;

/// Discrete grid position expressed in cell coordinates.
///
/// `x` grows to the east and `y` grows to the south, matching row-major
/// storage where row `y` is printed below row `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position reached by applying `offset`.
    pub const fn step(self, offset: Offset) -> Self {
        Self::new(self.x + offset.dx, self.y + offset.dy)
    }

    /// Returns the move vector that leads from `self` to `to`.
    pub const fn offset_to(self, to: Position) -> Offset {
        Offset::new(to.x - self.x, to.y - self.y)
    }

    /// True when `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(self, other: Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative move between two positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// One of the eight unit moves available from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    West,
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
}

impl Direction {
    /// Expansion order. Neighbour generation walks this list clockwise from
    /// west, which fixes node creation order and therefore tie-breaking.
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
    ];

    pub const fn offset(self) -> Offset {
        match self {
            Direction::West => Offset::new(-1, 0),
            Direction::NorthWest => Offset::new(-1, -1),
            Direction::North => Offset::new(0, -1),
            Direction::NorthEast => Offset::new(1, -1),
            Direction::East => Offset::new(1, 0),
            Direction::SouthEast => Offset::new(1, 1),
            Direction::South => Offset::new(0, 1),
            Direction::SouthWest => Offset::new(-1, 1),
        }
    }

    /// The four orthogonal neighbours, used for wall adjacency.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];
}
