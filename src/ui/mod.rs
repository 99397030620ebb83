//! Terminal rendering: header, podcast list, details, and footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;

mod footer;
mod header;
pub mod helpers;
mod results;
mod theme;

/// What: Draw one frame of the interface.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; the list highlight may be adjusted by the list widget
///
/// Output:
/// - None.
///
/// Details:
/// - Layout top to bottom: header (3 rows), list (rest), details (5 rows), footer (2 rows).
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme::theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    results::render_results(f, app, chunks[1]);
    results::render_details(f, app, chunks[2]);
    footer::render_footer(f, app, chunks[3]);
}
