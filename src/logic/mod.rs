//! Core non-UI logic: the filter-sort engine, windowing, and the reset policy.

/// Search and genre predicates plus the combined engine.
pub mod filter;
/// Window reset on query changes.
pub mod reset;
/// Stable orderings and the title collation key.
pub mod sort;
pub mod window;

// Re-export public APIs so callers can use `crate::logic::...`
pub use filter::{filter_and_sort, matches_genre, matches_search};
pub use reset::{apply_query_edit, reset_window};
pub use sort::{CollationKey, sort_records};
pub use window::{WindowMeta, Windowed, go_to_page, load_more, toggle_mode, total_pages, window};
