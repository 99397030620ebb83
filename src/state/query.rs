//! User filter/sort intent.

use super::types::SortOrder;

/// The three user-controlled pipeline parameters.
///
/// Compared by value: the reset policy fires only when one of these fields
/// actually changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive title substring; empty matches everything.
    pub search_term: String,
    /// Genre id to require; `None` means "All Genres".
    pub selected_genre: Option<u32>,
    /// Ordering applied after filtering.
    pub sort_order: SortOrder,
}

impl QueryState {
    /// Whether any filter narrows the collection.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.search_term.is_empty() || self.selected_genre.is_some()
    }
}
