//! Event handling layer for the podcast explorer TUI.
//!
//! `handle_event` routes key presses to the search editor or the
//! navigation handlers; both only talk to the session through its mutators.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::AppState;

mod navigation;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    app.status = None;
    if is_quit(ke) {
        app.should_quit = true;
        return true;
    }
    if !navigation::handle_navigation_key(ke, app) {
        search::handle_search_key(ke, app);
    }
    app.clamp_selection();
    false
}

/// Ctrl-C and Ctrl-Q end the session.
fn is_quit(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ke.code, KeyCode::Char('c' | 'C' | 'q' | 'Q'))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

    use crate::state::{AppState, GENRES, PodcastRecord, Session, ViewMode};

    /// Key press event.
    pub fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Key press with Ctrl held.
    pub fn ctrl(c: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// App with `n` records titled "Show NN", genres alternating 1 and 2.
    pub fn ready_app(n: usize, mode: ViewMode) -> AppState {
        let mut session = Session::new(&GENRES, mode);
        let records = (0..n)
            .map(|i| PodcastRecord {
                id: i.to_string(),
                title: format!("Show {i:02}"),
                genres: vec![if i % 2 == 0 { 1 } else { 2 }],
                updated: format!("2024-01-{:02}", i % 28 + 1),
                ..PodcastRecord::default()
            })
            .collect();
        session.finish_fetch(Ok(records));
        AppState::new(session, "test")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{ctrl, key, ready_app};
    use super::*;
    use crate::state::ViewMode;
    use crossterm::event::KeyEvent;

    #[test]
    /// What: Quit chords end the loop
    ///
    /// - Input: Ctrl-C and Ctrl-Q
    /// - Output: `true` and `should_quit` set
    fn events_quit_keys() {
        for c in ['c', 'q'] {
            let mut app = ready_app(3, ViewMode::Paginated);
            assert!(handle_event(&ctrl(c), &mut app));
            assert!(app.should_quit);
        }
    }

    #[test]
    /// What: Key releases and non-key events are ignored
    ///
    /// - Input: A release of 'a'; a resize event
    /// - Output: Search term unchanged
    fn events_ignore_release_and_resize() {
        let mut app = ready_app(3, ViewMode::Paginated);
        let release = CEvent::Key(KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(!handle_event(&release, &mut app));
        assert!(!handle_event(&CEvent::Resize(80, 24), &mut app));
        assert!(app.session.query().search_term.is_empty());
    }

    #[test]
    /// What: Typing narrows the list and resets the page in one step
    ///
    /// - Input: 30 records, move to page 2, type "1"
    /// - Output: Page back to 1; search "1"
    fn events_typing_resets_page() {
        let mut app = ready_app(30, ViewMode::Paginated);
        handle_event(&key(KeyCode::Right), &mut app);
        assert_eq!(app.session.window_state().page, 2);
        handle_event(&key(KeyCode::Char('1')), &mut app);
        assert_eq!(app.session.query().search_term, "1");
        assert_eq!(app.session.window_state().page, 1);
    }
}
