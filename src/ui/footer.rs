use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::window_summary;
use super::theme::theme;
use crate::logic::WindowMeta;
use crate::state::{AppState, View};

/// Key hints shown when no status message is pending.
const KEY_HINTS: &str = "Type to search · Esc clear · Tab/Shift-Tab genre · F2 sort · F3 view · ↑↓ select · Ctrl-Q quit";

/// What: Render the navigation controls and the status/hint line.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state
/// - `area`: Footer rectangle (2 rows)
///
/// Output:
/// - None.
///
/// Details:
/// - Paginated mode shows Prev/Next, dimmed when unavailable.
/// - Load-more mode shows the "Load More" control only while records remain hidden.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let active = Style::default().fg(th.green).add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(th.overlay1);
    let text = Style::default().fg(th.text);

    let nav = match app.session.view() {
        View::Ready {
            windowed, matched, ..
        } => {
            let summary = window_summary(windowed.meta, windowed.visible.len(), matched);
            match windowed.meta {
                WindowMeta::Pagination {
                    can_prev, can_next, ..
                } => Line::from(vec![
                    Span::styled("◀ Prev", if can_prev { active } else { inactive }),
                    Span::styled(format!("   {summary}   "), text),
                    Span::styled("Next ▶", if can_next { active } else { inactive }),
                ]),
                WindowMeta::LoadMore { has_more, .. } => {
                    let mut spans = vec![Span::styled(summary, text)];
                    if has_more {
                        spans.push(Span::styled("   [Enter] Load More", active));
                    }
                    Line::from(spans)
                }
            }
        }
        View::Loading => Line::from(Span::styled("Waiting for data…", inactive)),
        View::Failed(_) => Line::from(Span::styled("No data", inactive)),
    };

    let status = app.status.as_ref().map_or_else(
        || Line::from(Span::styled(KEY_HINTS, Style::default().fg(th.overlay2))),
        |msg| Line::from(Span::styled(msg.clone(), Style::default().fg(th.yellow))),
    );

    f.render_widget(
        Paragraph::new(vec![nav, status]).style(Style::default().bg(th.base)),
        area,
    );
}
