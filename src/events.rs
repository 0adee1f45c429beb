//! Event handling functions for user input in the maze viewer.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Polls for a keyboard event and applies it to the viewer state.
///
/// The poll times out so that the caller keeps redrawing, for instance after a terminal resize.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Applies a single key press.
///
/// `q` and `Esc` leave the viewer and `p` toggles the route overlay; other keys are ignored.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('p') => app.show_path = !app.show_path,
        _ => {}
    }
}
