//! Type definitions for the classification of maze cells.

/// Semantic class of a single maze cell.
///
/// This enumeration maps the characters of the textual maze format onto the categories the search
/// cares about. Only [`Cell::Wall`] blocks movement; every other class can be stepped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open floor.
    ///
    /// This variant represents a walkable cell that is not part of the discovered route. It is
    /// written as `'0'`.
    Empty,
    /// Impassable wall.
    ///
    /// This variant represents a cell the search never enters. It is written as `'1'`.
    Wall,
    /// Start of the route.
    ///
    /// This variant represents the cell the search begins from. It is written as `'2'`.
    Start,
    /// Goal of the route.
    ///
    /// This variant represents the cell the search tries to reach. It is written as `'3'`.
    Goal,
    /// Open floor lying on the discovered route.
    ///
    /// This variant represents an [`Cell::Empty`] cell that was marked after solving. It is
    /// written as `'4'`.
    Path,
}

impl Cell {
    /// Classifies a character of the textual maze format.
    ///
    /// Returns `None` for characters outside of `'0'..='4'`.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Empty),
            '1' => Some(Self::Wall),
            '2' => Some(Self::Start),
            '3' => Some(Self::Goal),
            '4' => Some(Self::Path),
            _ => None,
        }
    }

    /// Returns the character this class is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Wall => '1',
            Self::Start => '2',
            Self::Goal => '3',
            Self::Path => '4',
        }
    }

    /// Returns whether the search may step onto a cell of this class.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_char() {
        assert_eq!(Cell::from_char('0'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('1'), Some(Cell::Wall));
        assert_eq!(Cell::from_char('2'), Some(Cell::Start));
        assert_eq!(Cell::from_char('3'), Some(Cell::Goal));
        assert_eq!(Cell::from_char('4'), Some(Cell::Path));
    }

    #[test]
    fn test_cell_from_invalid_char() {
        assert_eq!(Cell::from_char('5'), None);
        assert_eq!(Cell::from_char('#'), None);
        assert_eq!(Cell::from_char(' '), None);
    }

    #[test]
    fn test_cell_symbol_matches_parsing() {
        for cell in [Cell::Empty, Cell::Wall, Cell::Start, Cell::Goal, Cell::Path] {
            assert_eq!(
                Cell::from_char(cell.symbol()),
                Some(cell),
                "symbol of {cell:?} should parse back to it"
            );
        }
    }

    #[test]
    fn test_cell_walkability() {
        assert!(!Cell::Wall.is_walkable(), "walls block movement");
        assert!(Cell::Empty.is_walkable(), "empty cells are walkable");
        assert!(Cell::Start.is_walkable(), "the start is walkable");
        assert!(Cell::Goal.is_walkable(), "the goal is walkable");
        assert!(Cell::Path.is_walkable(), "path cells are walkable");
    }
}
