use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::theme;
use crate::state::{AppState, ViewMode, selector_label};

/// What: Render the search input and the active genre, sort, and mode.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state
/// - `area`: Header rectangle (3 rows with borders)
///
/// Output:
/// - None; draws a bordered block titled with the data source.
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let q = app.session.query();
    let label = |s: &'static str| Span::styled(s, Style::default().fg(th.overlay2));
    let value = |s: String| {
        Span::styled(
            s,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )
    };
    let mode = match app.session.window_state().mode {
        ViewMode::Paginated => "Paginated",
        ViewMode::LoadMore => "Load More",
    };
    let line = Line::from(vec![
        label("Search: "),
        Span::styled(q.search_term.clone(), Style::default().fg(th.text)),
        Span::styled("▏", Style::default().fg(th.mauve)),
        label("   Genre: "),
        value(selector_label(q.selected_genre, app.session.genres())),
        label("   Sort: "),
        value(q.sort_order.label().to_string()),
        label("   View: "),
        value(mode.to_string()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .title(Span::styled(
            " Podcast Explorer ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", app.source_label),
            Style::default().fg(th.overlay1),
        )));
    f.render_widget(
        Paragraph::new(line)
            .block(block)
            .style(Style::default().bg(th.base)),
        area,
    );
}
