//! Windowing over the filtered list: page slices or a growing prefix.

use crate::state::{PAGE_SIZE, ViewMode, WindowState};

/// Navigation metadata accompanying a visible slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMeta {
    /// Classic pagination.
    Pagination {
        /// Current 1-based page.
        page: usize,
        /// Number of pages; 0 when nothing matched.
        total_pages: usize,
        /// A previous page exists.
        can_prev: bool,
        /// A next page exists.
        can_next: bool,
    },
    /// Incremental reveal.
    LoadMore {
        /// Requested prefix length (may exceed the list length).
        visible_count: usize,
        /// Filtered records remain hidden past the prefix.
        has_more: bool,
    },
}

/// Visible slice of a filtered list plus its navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Windowed<'a, T> {
    /// Records to render, in filtered order.
    pub visible: &'a [T],
    /// Pagination or load-more state for the controls.
    pub meta: WindowMeta,
}

/// Number of pages needed for `len` records; 0 for an empty list.
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// What: Select the visible part of a filtered list.
///
/// Inputs:
/// - `filtered`: Output of the filter-sort engine
/// - `state`: Current window position and mode
///
/// Output:
/// - `Windowed` with the slice to render and the metadata for the active mode.
///
/// Details:
/// - Paginated: `filtered[(page-1)*PAGE_SIZE .. page*PAGE_SIZE]`, clamped to the list, so a page
///   past the end renders empty rather than failing.
/// - Load more: `filtered[..visible_count]`, clamped to the list.
#[must_use]
pub fn window<'a, T>(filtered: &'a [T], state: &WindowState) -> Windowed<'a, T> {
    let len = filtered.len();
    match state.mode {
        ViewMode::Paginated => {
            let page = state.page.max(1);
            let start = (page - 1).saturating_mul(PAGE_SIZE).min(len);
            let end = page.saturating_mul(PAGE_SIZE).min(len);
            let pages = total_pages(len);
            Windowed {
                visible: &filtered[start..end],
                meta: WindowMeta::Pagination {
                    page,
                    total_pages: pages,
                    can_prev: page > 1,
                    can_next: page < pages,
                },
            }
        }
        ViewMode::LoadMore => {
            let end = state.visible_count.min(len);
            Windowed {
                visible: &filtered[..end],
                meta: WindowMeta::LoadMore {
                    visible_count: state.visible_count,
                    has_more: state.visible_count < len,
                },
            }
        }
    }
}

/// What: Jump to a page if it exists for the current filtered length.
///
/// Inputs:
/// - `state`: Window to update
/// - `page`: Requested 1-based page
/// - `filtered_len`: Length of the current filtered list
///
/// Output:
/// - `true` when the page was applied; `false` when the request was ignored.
///
/// Details:
/// - Requests outside `1..=total_pages` are dropped with a debug log, not an error.
pub fn go_to_page(state: &mut WindowState, page: usize, filtered_len: usize) -> bool {
    let pages = total_pages(filtered_len);
    if page < 1 || page > pages {
        tracing::debug!(page, total_pages = pages, "ignoring out-of-range page request");
        return false;
    }
    state.page = page;
    true
}

/// Reveal one more page of records in load-more mode.
///
/// Growth is unconditional; slicing clamps any excess.
pub const fn load_more(state: &mut WindowState) {
    state.visible_count = state.visible_count.saturating_add(PAGE_SIZE);
}

/// Switch between pagination and load-more; both counters are kept as they are.
pub const fn toggle_mode(state: &mut WindowState) {
    state.mode = state.mode.toggled();
}
