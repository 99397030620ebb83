use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use super::helpers::{spinner_frame, truncate_to_width};
use super::theme::theme;
use crate::state::{AppState, GenreDefinition, PodcastRecord, View, genre_titles};
use crate::util::format_updated;

/// Bordered block shared by the list, loading, and error panes.
fn pane_block(title: String) -> Block<'static> {
    let th = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(title, Style::default().fg(th.mauve)))
}

/// Two-line list entry: title and seasons, then genres and update date.
fn record_item(r: &PodcastRecord, genres: &[GenreDefinition], width: usize) -> ListItem<'static> {
    let th = theme();
    let title = if r.title.is_empty() {
        "(untitled)".to_string()
    } else {
        truncate_to_width(&r.title, width.saturating_sub(16))
    };
    let mut first = vec![Span::styled(
        title,
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    if let Some(n) = r.seasons {
        let plural = if n == 1 { "" } else { "s" };
        first.push(Span::styled(
            format!("  {n} season{plural}"),
            Style::default().fg(th.overlay2),
        ));
    }
    let labels = genre_titles(&r.genres, genres);
    let genre_text = if labels.is_empty() {
        "Uncategorized".to_string()
    } else {
        labels.join(" · ")
    };
    let second = Line::from(vec![
        Span::raw("  "),
        Span::styled(genre_text, Style::default().fg(th.lavender)),
        Span::styled(
            format!("  updated {}", format_updated(&r.updated)),
            Style::default().fg(th.subtext0),
        ),
    ]);
    ListItem::new(vec![Line::from(first), second])
}

/// What: Render the body: loading pane, error pane, or the visible podcasts.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state (the list highlight is updated while drawing)
/// - `area`: Body rectangle
///
/// Output:
/// - None.
///
/// Details:
/// - A failed fetch shows only the error; no list is drawn.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    match app.session.view() {
        View::Loading => {
            let text = format!("{} Loading podcasts…", spinner_frame());
            let p = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(th.yellow))))
                .alignment(Alignment::Center)
                .block(pane_block(" Podcasts ".to_string()));
            f.render_widget(p, area);
        }
        View::Failed(e) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Could not load podcasts",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(e.to_string(), Style::default().fg(th.text))),
                Line::from(""),
                Line::from(Span::styled(
                    "Check the URL or network and restart. Ctrl-Q quits.",
                    Style::default().fg(th.overlay2),
                )),
            ];
            let p = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(pane_block(" Error ".to_string()));
            f.render_widget(p, area);
        }
        View::Ready {
            windowed,
            matched,
            total,
        } => {
            let title = format!(" Podcasts ({matched}/{total}) ");
            if windowed.visible.is_empty() {
                let msg = if app.session.query().is_filtering() {
                    "No podcasts match your search."
                } else {
                    "The directory is empty."
                };
                let p = Paragraph::new(Line::from(Span::styled(
                    msg,
                    Style::default().fg(th.overlay2),
                )))
                .alignment(Alignment::Center)
                .block(pane_block(title));
                f.render_widget(p, area);
                return;
            }
            let width = usize::from(area.width.saturating_sub(2));
            let genres = app.session.genres();
            let items: Vec<ListItem> = windowed
                .visible
                .iter()
                .map(|r| record_item(r, genres, width))
                .collect();
            let list = List::new(items)
                .style(Style::default().fg(th.text).bg(th.base))
                .block(pane_block(title))
                .highlight_style(Style::default().bg(th.surface1))
                .highlight_symbol("▶ ");
            f.render_stateful_widget(list, area, &mut app.list_state);
        }
    }
}

/// What: Render the description of the highlighted podcast.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state
/// - `area`: Details rectangle
///
/// Output:
/// - None; an empty bordered pane when nothing is highlighted.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let selected = match app.session.view() {
        View::Ready { windowed, .. } => app
            .list_state
            .selected()
            .and_then(|i| windowed.visible.get(i)),
        View::Loading | View::Failed(_) => None,
    };
    let lines = selected.map_or_else(Vec::new, |r| {
        let mut lines = vec![Line::from(Span::styled(
            r.title.clone(),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ))];
        let desc = if r.description.is_empty() {
            "No description."
        } else {
            r.description.as_str()
        };
        lines.push(Line::from(Span::styled(
            desc.to_string(),
            Style::default().fg(th.subtext0),
        )));
        lines
    });
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.mantle))
        .block(pane_block(" Details ".to_string()));
    f.render_widget(p, area);
}
