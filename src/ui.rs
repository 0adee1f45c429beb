//! User interface rendering functions for the maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{coord::Coord, grid::Grid, types::Cell, App};

/// Colors of the cell classes drawn on the canvas; empty cells are left blank.
const CELL_COLORS: [(Cell, Color); 4] = [
    (Cell::Wall, Color::Green),
    (Cell::Start, Color::Yellow),
    (Cell::Goal, Color::Cyan),
    (Cell::Path, Color::Red),
];

/// Renders the viewer.
///
/// The maze is centered in the terminal with one canvas dot per cell, and a tooltip with the key
/// bindings and the search outcome sits at the bottom.
///
/// # Errors
///
/// This function may return errors from layout lookups or from mazes too large for the canvas.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    frame.render_widget(Clear, frame.area());

    let maze_rows = u16::try_from(app.grid.rows())?;
    let maze_columns = u16::try_from(app.grid.cols())?;

    // Maze and padding area above a tooltip block
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let maze_area = center(maze_content_area, maze_columns, maze_rows)?;

    let mut layers = Vec::new();
    for (class, color) in CELL_COLORS {
        if class == Cell::Path && !app.show_path {
            continue;
        }

        let points: Vec<Coord> = app
            .grid
            .iter_cells()
            .filter_map(|(point, cell)| (cell == class).then_some(point))
            .collect();
        layers.push((transform_to_screen_coords(&points, &app.grid)?, color));
    }

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(maze_area.width.into(), 2)).into(),
            (rounded_div::i32(maze_area.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(maze_area.height.into(), 2)).into(),
            (rounded_div::i32(maze_area.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });

    frame.render_widget(maze, maze_area);

    let tooltip = Block::bordered()
        .title("(p) toggle path / (q) quit")
        .title_bottom(app.status())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip, tooltip_area);

    Ok(())
}

/// Returns a `width` by `height` rectangle centered within `area`.
fn center(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(height),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze row from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(width),
        Constraint::Min(1),
    ])
    .split(row)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")
}

/// Transforms maze coordinates into canvas coordinates centered on the origin.
///
/// Rows map to `(rows - 1) / 2 - row`, so the first row ends up on top, and columns map to
/// `col - (cols - 1) / 2`.
///
/// # Errors
///
/// This function returns an error if the grid dimensions do not fit the canvas.
pub(crate) fn transform_to_screen_coords(
    points: &[Coord],
    grid: &Grid,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.rows())?);
    let cols_n = f64::from(u16::try_from(grid.cols())?);

    Ok(points
        .iter()
        .map(|point| {
            let screen_x = f64::from(point.x) - (cols_n - 1.) / 2.;
            let screen_y = (rows_n - 1.) / 2. - f64::from(point.y);

            (screen_x, screen_y)
        })
        .collect())
}
