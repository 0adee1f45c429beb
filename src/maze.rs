//! Maze façade tying the grid to the search.

use std::{fmt, path::Path, str::FromStr};

use log::{info, warn};

use crate::{
    error::{MazeError, Result},
    file_io,
    grid::Grid,
    pathfinding::{self, Solution},
    types::Cell,
};

/// A maze that can be solved in place.
///
/// This is the entry point file collaborators and the command line use: it locates the route
/// endpoints, runs the search and exposes the annotated grid afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cells of the maze, annotated with the route once solved.
    grid: Grid,
}

impl Maze {
    /// Wraps a grid.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Loads a maze from a description file.
    ///
    /// # Errors
    ///
    /// See [`file_io::load`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        file_io::load(path).map(Self::new)
    }

    /// Stores the maze, route included, as a description file.
    ///
    /// # Errors
    ///
    /// See [`file_io::save`].
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        file_io::save(&self.grid, path)
    }

    /// Returns the underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the maze and returns its grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Finds a shortest route from the start to the goal and marks it in the grid.
    ///
    /// The first start and goal cells in reading order are used. When the goal cannot be reached
    /// the grid stays untouched and [`Solution::Unreachable`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MissingStart`] or [`MazeError::MissingGoal`] when the grid lacks one of
    /// the endpoints, in which case no search is attempted.
    pub fn solve(&mut self) -> Result<Solution> {
        let start = self
            .grid
            .find_first(Cell::Start)
            .ok_or(MazeError::MissingStart)?;
        let goal = self
            .grid
            .find_first(Cell::Goal)
            .ok_or(MazeError::MissingGoal)?;

        let solution = pathfinding::search(&mut self.grid, start, goal)?;
        match solution {
            Solution::Found { steps, expanded } => {
                info!(
                    "solved maze from {start} to {goal}: {steps} steps, {expanded} cells expanded"
                );
            }
            Solution::Unreachable { expanded } => {
                warn!(
                    "no route from {start} to {goal} after expanding {expanded} cells, \
                     leaving maze unchanged"
                );
            }
        }

        Ok(solution)
    }
}

impl From<Grid> for Maze {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(input: &str) -> Result<Self> {
        file_io::parse(input).map(Self::new)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, formatter)
    }
}
