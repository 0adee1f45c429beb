//! Error types shared by the maze model, the search and the file collaborators.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::coord::Coord;

/// Failures raised while loading, solving or saving a maze.
#[expect(
    clippy::module_name_repetitions,
    reason = "The crate root re-exports this type, where the prefix carries the meaning."
)]
#[derive(Debug, Error)]
pub enum MazeError {
    /// A maze file could not be opened, read or written.
    #[error("failed to access maze file `{}`: {source}", .path.display())]
    Io {
        /// File the operation was performed on.
        path: PathBuf,
        /// Underlying operating system failure.
        source: io::Error,
    },
    /// The maze text does not follow the `rows cols row...` layout.
    #[error("malformed maze description: {0}")]
    Format(String),
    /// The grid has no start cell.
    #[error("maze has no start cell ('2')")]
    MissingStart,
    /// The grid has no goal cell.
    #[error("maze has no goal cell ('3')")]
    MissingGoal,
    /// A cell was read at a coordinate that lies outside of the grid.
    #[error("coordinate {0} lies outside of the grid")]
    OutOfBounds(Coord),
}

impl MazeError {
    /// Wraps an I/O failure together with the file it happened on.
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns whether the error stems from a grid that lacks one of its route endpoints.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingStart | Self::MissingGoal)
    }
}

/// Result alias used throughout the maze core.
pub(crate) type Result<T> = std::result::Result<T, MazeError>;
