use crate::state::{PodcastRecord, QueryState};

use super::sort::sort_records;

/// Case-insensitive title substring test; an empty needle matches every title.
#[must_use]
pub fn matches_search(record: &PodcastRecord, needle_lower: &str) -> bool {
    needle_lower.is_empty() || record.title.to_lowercase().contains(needle_lower)
}

/// Genre membership test; `None` ("All Genres") matches every record, including uncategorized ones.
#[must_use]
pub fn matches_genre(record: &PodcastRecord, selected: Option<u32>) -> bool {
    selected.is_none_or(|id| record.genres.contains(&id))
}

/// What: Produce the ordered, filtered podcast list for a query.
///
/// Inputs:
/// - `records`: Raw collection from the data store (may be empty while loading)
/// - `query`: Search term, genre selector, and sort order
///
/// Output:
/// - New vector holding the records that pass both filters, stably sorted by `query.sort_order`.
///
/// Details:
/// - Both predicates run before the sort; the input is never mutated.
/// - The result is a subsequence of `records` (no duplicates, nothing fabricated), and running
///   the function again on its own output with the same query returns the same sequence.
#[must_use]
pub fn filter_and_sort(records: &[PodcastRecord], query: &QueryState) -> Vec<PodcastRecord> {
    let needle = query.search_term.to_lowercase();
    let mut filtered: Vec<PodcastRecord> = records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| matches_genre(r, query.selected_genre))
        .cloned()
        .collect();
    sort_records(&mut filtered, query.sort_order);
    filtered
}
