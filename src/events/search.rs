use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// What: Edit the search term from a key press.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Output:
/// - `true` when the key was consumed.
///
/// Details:
/// - Printable characters append (Shift allowed, Ctrl/Alt chords are not text).
/// - Backspace removes the last character; Esc clears the term.
pub fn handle_search_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let changed = match ke.code {
        KeyCode::Char(c)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.session.push_search_char(c)
        }
        KeyCode::Backspace => app.session.pop_search_char(),
        KeyCode::Esc => app.session.set_search_term(String::new()),
        _ => return false,
    };
    if changed {
        app.select_first();
    }
    true
}
