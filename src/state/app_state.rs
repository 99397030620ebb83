//! Central `AppState` container shared by the event, runtime, and UI layers.

use ratatui::widgets::ListState;

use crate::state::session::{Session, View};

/// Global application state for one terminal session.
///
/// Wraps the pipeline [`Session`] with the bits only the shell needs: the
/// highlighted row, a transient status line, and the quit flag.
#[derive(Debug)]
pub struct AppState {
    /// Store, query, window, and memoized filtered list.
    pub session: Session,
    /// Highlighted row within the visible slice.
    pub list_state: ListState,
    /// One-line message shown in the footer until the next key press.
    pub status: Option<String>,
    /// Where the data comes from, shown in the header.
    pub source_label: String,
    /// Set by the quit keys; the event loop exits after the current message.
    pub should_quit: bool,
}

impl AppState {
    /// What: Build the shell state around a fresh session.
    ///
    /// Inputs:
    /// - `session`: Pipeline state, usually still loading
    /// - `source_label`: URL or file path the data is read from
    ///
    /// Output:
    /// - `AppState` with the first row highlighted and no status message.
    #[must_use]
    pub fn new(session: Session, source_label: impl Into<String>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            session,
            list_state,
            status: None,
            source_label: source_label.into(),
            should_quit: false,
        }
    }

    /// Number of records currently on screen.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.session.view() {
            View::Ready { windowed, .. } => windowed.visible.len(),
            View::Loading | View::Failed(_) => 0,
        }
    }

    /// What: Keep the highlight inside the visible slice.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Highlight cleared for an empty slice, otherwise clamped to the last row.
    ///
    /// Details:
    /// - Called after every transition that can shrink or replace the visible slice.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let idx = self.list_state.selected().unwrap_or(0).min(len - 1);
        self.list_state.select(Some(idx));
    }

    /// Move the highlight by `delta` rows, stopping at either end.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(next));
    }

    /// Move the highlight to the first row after the window jumped.
    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
        self.clamp_selection();
    }
}
