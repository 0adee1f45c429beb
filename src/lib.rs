//! Grid maze solver built around A* search.
//!
//! A maze is read from a text description, the shortest route from its start cell to its goal cell
//! is found with A* guided by the Manhattan distance, and the maze is written back with the route
//! marked. The [`Maze`] façade is the usual entry point:
//!
//! ```
//! use maze_astar::Maze;
//!
//! let mut maze: Maze = "1 5\n20003".parse()?;
//! let solution = maze.solve()?;
//!
//! assert_eq!(solution.steps(), Some(4));
//! assert_eq!(maze.to_string(), "24443");
//! # Ok::<(), maze_astar::MazeError>(())
//! ```

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod coord;
mod error;
mod events;
pub mod file_io;
mod grid;
mod maze;
mod pathfinding;
mod types;
mod ui;

use std::io::{self, Write as _};

use color_eyre::eyre::Result;

pub use crate::{
    app::App,
    cli::{diagnostic, init_logging, Cli},
    coord::{manhattan_distance, Coord, NEIGHBOR_OFFSETS},
    error::MazeError,
    grid::Grid,
    maze::Maze,
    pathfinding::{search, Solution},
    types::Cell,
};

/// Runs one solver invocation as configured on the command line.
///
/// The maze is loaded, solved, printed unless quiet, saved and finally shown in the viewer when
/// requested. A maze without a start or goal stops the run before anything is printed or saved.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, lacks a route endpoint, or if printing, saving
/// or running the viewer fails.
pub fn run(cli: &Cli) -> Result<()> {
    let mut maze = Maze::from_file(&cli.input)?;
    let solution = maze.solve()?;

    if !cli.quiet {
        let mut stdout = io::stdout().lock();
        file_io::print_to(maze.grid(), &mut stdout)?;
        stdout.flush()?;
    }

    maze.save_to(&cli.output)?;

    if cli.view {
        let mut terminal = ratatui::init();
        let result = App::new(maze.into_grid(), solution).run(&mut terminal);
        ratatui::restore();
        result?;
    }

    Ok(())
}
