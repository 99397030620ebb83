use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::WindowMeta;
use crate::state::{AppState, View, selector_label};

/// What: Handle genre, sort, mode, page, and highlight keys.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Output:
/// - `true` when the key was consumed; `false` to let the search editor try it.
///
/// Details:
/// - Tab/Shift-Tab cycle genre; F2 or Ctrl-S cycle sort; F3 or Ctrl-T toggle mode.
/// - Left/Right and PageUp/PageDown change page; Enter or Ctrl-L loads more.
/// - Up/Down move the highlight inside the visible slice.
pub fn handle_navigation_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Tab => cycle_genre(app, true),
        KeyCode::BackTab => cycle_genre(app, false),
        KeyCode::F(2) => cycle_sort(app),
        KeyCode::Char('s' | 'S') if ctrl => cycle_sort(app),
        KeyCode::F(3) => toggle_mode(app),
        KeyCode::Char('t' | 'T') if ctrl => toggle_mode(app),
        KeyCode::Right | KeyCode::PageDown => next_page(app),
        KeyCode::Left | KeyCode::PageUp => prev_page(app),
        KeyCode::Enter => load_more(app),
        KeyCode::Char('l' | 'L') if ctrl => load_more(app),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Home => app.select_first(),
        _ => return false,
    }
    true
}

/// Step the genre selector and announce the new choice.
fn cycle_genre(app: &mut AppState, forward: bool) {
    if app.session.cycle_genre(forward) {
        app.select_first();
    }
    let label = selector_label(app.session.query().selected_genre, app.session.genres());
    app.status = Some(format!("Genre: {label}"));
}

/// Step the sort order and announce it.
fn cycle_sort(app: &mut AppState) {
    if app.session.cycle_sort() {
        app.select_first();
    }
    app.status = Some(format!("Sort: {}", app.session.query().sort_order));
}

/// Flip between pagination and load-more; positions are kept.
fn toggle_mode(app: &mut AppState) {
    app.session.toggle_mode();
    app.select_first();
}

/// Advance one page in paginated mode.
fn next_page(app: &mut AppState) {
    if !app.session.window_state().mode.is_paginated() {
        return;
    }
    if app.session.next_page() {
        app.select_first();
    } else {
        app.status = Some("No next page".to_string());
    }
}

/// Go back one page in paginated mode.
fn prev_page(app: &mut AppState) {
    if !app.session.window_state().mode.is_paginated() {
        return;
    }
    if app.session.prev_page() {
        app.select_first();
    } else {
        app.status = Some("Already on the first page".to_string());
    }
}

/// What: Reveal another page of records in load-more mode.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - None; a status hint explains why nothing happened.
///
/// Details:
/// - Only acts while hidden records remain, mirroring a "Load More" control that is
///   shown only then.
fn load_more(app: &mut AppState) {
    let has_more = match app.session.view() {
        View::Ready { windowed, .. } => match windowed.meta {
            WindowMeta::LoadMore { has_more, .. } => Some(has_more),
            WindowMeta::Pagination { .. } => None,
        },
        View::Loading | View::Failed(_) => Some(false),
    };
    match has_more {
        Some(true) => app.session.load_more(),
        Some(false) => app.status = Some("All matching podcasts are shown".to_string()),
        None => app.status = Some("Press F3 to switch to load-more mode".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::events::handle_event;
    use crate::events::test_support::{ctrl, key, ready_app};
    use crate::state::{SortOrder, ViewMode};
    use crossterm::event::KeyCode;

    #[test]
    /// What: Paging keys move within bounds and report the edges
    ///
    /// - Input: 30 records (3 pages); Left at page 1, Right x3, PageUp
    /// - Output: Status at the edges; pages 1 -> 3 -> 2
    fn navigation_paging_bounds() {
        let mut app = ready_app(30, ViewMode::Paginated);
        handle_event(&key(KeyCode::Left), &mut app);
        assert_eq!(app.status.as_deref(), Some("Already on the first page"));
        handle_event(&key(KeyCode::Right), &mut app);
        handle_event(&key(KeyCode::PageDown), &mut app);
        assert_eq!(app.session.window_state().page, 3);
        handle_event(&key(KeyCode::Right), &mut app);
        assert_eq!(app.session.window_state().page, 3);
        assert_eq!(app.status.as_deref(), Some("No next page"));
        handle_event(&key(KeyCode::PageUp), &mut app);
        assert_eq!(app.session.window_state().page, 2);
    }

    #[test]
    /// What: Load more only grows while records remain hidden
    ///
    /// - Input: 20 records in load-more mode; Enter twice
    /// - Output: 24 after the first, unchanged after the second with a hint
    fn navigation_load_more_until_exhausted() {
        let mut app = ready_app(20, ViewMode::LoadMore);
        handle_event(&key(KeyCode::Enter), &mut app);
        assert_eq!(app.session.window_state().visible_count, 24);
        assert_eq!(app.visible_len(), 20);
        handle_event(&ctrl('l'), &mut app);
        assert_eq!(app.session.window_state().visible_count, 24);
        assert_eq!(app.status.as_deref(), Some("All matching podcasts are shown"));
    }

    #[test]
    /// What: Load more in paginated mode only hints at the mode switch
    ///
    /// - Input: Paginated app; Enter
    /// - Output: Counter unchanged; hint shown
    fn navigation_load_more_in_paginated_mode() {
        let mut app = ready_app(30, ViewMode::Paginated);
        handle_event(&key(KeyCode::Enter), &mut app);
        assert_eq!(app.session.window_state().visible_count, 12);
        assert!(app.status.is_some());
    }

    #[test]
    /// What: Genre, sort, and mode keys reach the session
    ///
    /// - Input: Tab, Shift-Tab, F2, Ctrl-S, F3, Ctrl-T
    /// - Output: Genre 1 then All; sort steps twice; mode flips and flips back
    fn navigation_selector_keys() {
        let mut app = ready_app(30, ViewMode::Paginated);
        handle_event(&key(KeyCode::Tab), &mut app);
        assert_eq!(app.session.query().selected_genre, Some(1));
        assert_eq!(app.status.as_deref(), Some("Genre: Personal Growth"));
        assert_eq!(app.session.filtered().len(), 15);
        handle_event(&key(KeyCode::BackTab), &mut app);
        assert_eq!(app.session.query().selected_genre, None);

        handle_event(&key(KeyCode::F(2)), &mut app);
        assert_eq!(app.session.query().sort_order, SortOrder::OldestFirst);
        handle_event(&ctrl('s'), &mut app);
        assert_eq!(app.session.query().sort_order, SortOrder::AlphaAsc);

        handle_event(&key(KeyCode::F(3)), &mut app);
        assert_eq!(app.session.window_state().mode, ViewMode::LoadMore);
        handle_event(&ctrl('t'), &mut app);
        assert_eq!(app.session.window_state().mode, ViewMode::Paginated);
    }

    #[test]
    /// What: Arrow keys move the highlight and the page change resets it
    ///
    /// - Input: Down x3, then Right
    /// - Output: Row 3, then row 0 on the next page
    fn navigation_highlight() {
        let mut app = ready_app(30, ViewMode::Paginated);
        for _ in 0..3 {
            handle_event(&key(KeyCode::Down), &mut app);
        }
        assert_eq!(app.list_state.selected(), Some(3));
        handle_event(&key(KeyCode::Right), &mut app);
        assert_eq!(app.list_state.selected(), Some(0));
    }
}
