//! Windowing position over the filtered list.

use super::types::{PAGE_SIZE, ViewMode};

/// Which part of the filtered list is visible.
///
/// Each mode keeps its own counter, so toggling the mode never loses the
/// other mode's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    /// Active windowing strategy.
    pub mode: ViewMode,
    /// 1-based page, read in [`ViewMode::Paginated`].
    pub page: usize,
    /// Revealed prefix length, read in [`ViewMode::LoadMore`]; always a whole number of pages.
    pub visible_count: usize,
}

impl WindowState {
    /// Fresh window in the given mode at its initial position.
    #[must_use]
    pub const fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            page: 1,
            visible_count: PAGE_SIZE,
        }
    }

    /// Whether both counters sit at their initial position.
    #[must_use]
    pub const fn is_at_start(&self) -> bool {
        self.page == 1 && self.visible_count == PAGE_SIZE
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}
