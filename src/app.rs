//! Interactive terminal viewer for a solved maze.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, grid::Grid, pathfinding::Solution, ui};

/// State of the maze viewer.
///
/// This structure holds what Ratatui renders on every frame and what Crossterm key events update.
pub struct App {
    /// Viewer exit flag.
    ///
    /// This field is set to `true` once the user asks to leave the viewer; it starts off `false`.
    pub(crate) exit: bool,
    /// Solved maze being displayed.
    pub(crate) grid: Grid,
    /// Outcome of the search that annotated the grid, shown in the status line.
    pub(crate) solution: Solution,
    /// Whether the route cells are drawn on top of the maze.
    pub(crate) show_path: bool,
}

impl App {
    /// Creates a viewer for a solved grid, with the route overlay enabled.
    #[must_use]
    pub const fn new(grid: Grid, solution: Solution) -> Self {
        Self {
            exit: false,
            grid,
            solution,
            show_path: true,
        }
    }

    /// Runs the main loop of the viewer.
    ///
    /// This function redraws the maze and handles user input until the exit flag is raised, after
    /// which it returns to the call site. Restoring the terminal is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing a frame or reading terminal events fails.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ =
                terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Returns the one line summary of the search outcome.
    pub(crate) fn status(&self) -> String {
        let expanded = self.solution.expanded();

        match self.solution.steps() {
            Some(steps) => format!("route of {steps} steps, {expanded} cells expanded"),
            None => format!("no route, {expanded} cells expanded"),
        }
    }
}
