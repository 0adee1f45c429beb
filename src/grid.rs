//! Rectangular maze grid and cell classification.
//!
//! This module contains the `Grid` struct, which owns the classified cells of a maze, answers
//! bounds queries and records which cells lie on a discovered route.

use std::fmt;

use crate::{
    coord::Coord,
    error::{MazeError, Result},
    types::Cell,
};

/// Rectangular matrix of maze cells.
///
/// The grid is built once from a maze description, has its route cells marked in place by the
/// search and is read-only afterwards. Every row holds exactly [`cols`](Grid::cols) cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells in every row.
    cols: usize,
    /// Cell classes stored row by row, top to bottom.
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid of `cols` columns from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Format`] if a row does not hold exactly `cols` cells.
    pub fn new(cols: usize, cells: Vec<Vec<Cell>>) -> Result<Self> {
        if let Some((row, line)) = cells
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != cols)
        {
            return Err(MazeError::Format(format!(
                "row {row} has {} cells, expected {cols}",
                line.len()
            )));
        }

        Ok(Self { cols, cells })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Translates a coordinate into `(column, row)` indices if it lies inside the grid.
    fn index(&self, point: Coord) -> Option<(usize, usize)> {
        let col = usize::try_from(point.x).ok()?;
        let row = usize::try_from(point.y).ok()?;

        (col < self.cols && row < self.rows()).then_some((col, row))
    }

    /// Returns whether the coordinate lies inside the grid.
    #[must_use]
    pub fn is_inside(&self, point: Coord) -> bool {
        self.index(point).is_some()
    }

    /// Returns the class of the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if the coordinate lies outside of the grid; callers are
    /// expected to check [`is_inside`](Grid::is_inside) first.
    pub fn cell_at(&self, point: Coord) -> Result<Cell> {
        self.index(point)
            .and_then(|(col, row)| self.cells.get(row)?.get(col).copied())
            .ok_or(MazeError::OutOfBounds(point))
    }

    /// Marks the cell at the given coordinate as part of the route.
    ///
    /// Only [`Cell::Empty`] cells change; start, goal, walls, already marked cells and coordinates
    /// outside of the grid are left alone, so the call may be repeated freely.
    pub fn mark_path(&mut self, point: Coord) {
        let Some((col, row)) = self.index(point) else {
            return;
        };

        if let Some(cell) = self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            if *cell == Cell::Empty {
                *cell = Cell::Path;
            }
        }
    }

    /// Returns the first coordinate holding the given class, scanning rows top to bottom.
    ///
    /// Should the grid hold several cells of the class, the first one in reading order wins.
    #[must_use]
    pub fn find_first(&self, class: Cell) -> Option<Coord> {
        self.cells.iter().enumerate().find_map(|(row, line)| {
            let col = line.iter().position(|&cell| cell == class)?;

            Some(Coord::new(i32::try_from(col).ok()?, i32::try_from(row).ok()?))
        })
    }

    /// Counts the cells of the given class.
    #[must_use]
    pub fn count(&self, class: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == class)
            .count()
    }

    /// Returns whether the grid holds any [`Cell::Path`] cell.
    ///
    /// Path cells come either from a search or straight from a description that already contained
    /// them, so this does not tell whether the grid has been solved.
    #[must_use]
    pub fn has_path_cells(&self) -> bool {
        self.count(Cell::Path) > 0
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Iterates over every cell together with its coordinate, in reading order.
    pub(crate) fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter_map(move |(col, &cell)| {
                Some((
                    Coord::new(i32::try_from(col).ok()?, i32::try_from(row).ok()?),
                    cell,
                ))
            })
        })
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row, with no trailing newline.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(formatter)?;
            }
            for cell in line {
                write!(formatter, "{}", cell.symbol())?;
            }
        }

        Ok(())
    }
}
