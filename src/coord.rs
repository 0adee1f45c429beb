//! Grid coordinates and the distance heuristic used by the search.

use std::{fmt, ops::Add};

/// Column/row position of a cell in a maze grid.
///
/// Coordinates are signed so that neighbor offsets may step outside the grid; callers check the
/// result against the grid bounds before reading a cell. The derived ordering compares the column
/// first and the row second, which is only relied upon for use as a key in ordered collections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Column index, growing to the right.
    pub x: i32,
    /// Row index, growing downwards.
    pub y: i32,
}

impl Coord {
    /// Builds a coordinate from a column and a row.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// Offsets of the four orthogonal neighbors: left, right, up, down.
///
/// The order decides which of several equally good neighbors the search settles on first, so
/// changing it changes the reported path on mazes with more than one shortest route.
pub const NEIGHBOR_OFFSETS: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

/// Manhattan distance between two coordinates.
///
/// This is the number of unit orthogonal steps between the points when nothing is in the way,
/// which makes it an admissible and consistent estimate for the search.
#[must_use]
pub const fn manhattan_distance(from: Coord, to: Coord) -> u32 {
    from.x.abs_diff(to.x) + from.y.abs_diff(to.y)
}
