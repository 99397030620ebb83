//! Core value types used by the podcast explorer state.

use std::fmt;

use crate::util::lenient;

/// Number of records shown per page, and the step used by "load more".
pub const PAGE_SIZE: usize = 12;

/// One podcast show as delivered by the fetch collaborator.
///
/// Only `title`, `genres` and `updated` take part in filtering and sorting;
/// the remaining fields are carried for display.
///
/// Deserialization is lenient per field: a value of the wrong JSON type degrades to the
/// field's default instead of rejecting the record.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct PodcastRecord {
    /// Opaque identifier as reported by the source (numeric ids are stringified).
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Display name; empty when the source omitted it.
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    /// Genre ids this show belongs to; empty means uncategorized.
    #[serde(deserialize_with = "lenient::genre_ids")]
    pub genres: Vec<u32>,
    /// Raw last-updated timestamp text, parsed on demand.
    #[serde(alias = "lastUpdated", deserialize_with = "lenient::text")]
    pub updated: String,
    /// Short blurb for the details line.
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    /// Number of seasons when known.
    #[serde(deserialize_with = "lenient::count")]
    pub seasons: Option<u32>,
    /// Cover image URL when known.
    #[serde(deserialize_with = "lenient::non_empty_text")]
    pub image: Option<String>,
}

/// One entry of the genre taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenreDefinition {
    /// Identifier matched against [`PodcastRecord::genres`].
    pub id: u32,
    /// Human-readable label; never used for matching.
    pub title: &'static str,
}

/// Ordering applied to the filtered podcast list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest `updated` first.
    #[default]
    RecentlyUpdated,
    /// Oldest `updated` first.
    OldestFirst,
    /// Title A to Z.
    AlphaAsc,
    /// Title Z to A.
    AlphaDesc,
    /// Input order kept; stands in for a label that maps to no known ordering.
    Unsorted,
}

impl SortOrder {
    /// Orderings offered to the user, in cycling order.
    pub const SELECTABLE: [Self; 4] = [
        Self::RecentlyUpdated,
        Self::OldestFirst,
        Self::AlphaAsc,
        Self::AlphaDesc,
    ];

    /// Return the label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RecentlyUpdated => "Recently Updated",
            Self::OldestFirst => "Oldest First",
            Self::AlphaAsc => "A-Z",
            Self::AlphaDesc => "Z-A",
            Self::Unsorted => "Unsorted",
        }
    }

    /// Return the string key used in settings files and on the command line.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::RecentlyUpdated => "recently_updated",
            Self::OldestFirst => "oldest_first",
            Self::AlphaAsc => "a_z",
            Self::AlphaDesc => "z_a",
            Self::Unsorted => "unsorted",
        }
    }

    /// What: Parse a sort order from its settings key, display label, or alias.
    ///
    /// Inputs:
    /// - `s`: Key or label text (case-insensitive, surrounding whitespace ignored).
    ///
    /// Output:
    /// - The matching order; [`SortOrder::Unsorted`] when nothing matches.
    ///
    /// Details:
    /// - An unknown value is not an error: it degrades to the identity ordering.
    #[must_use]
    pub fn from_config_key(s: &str) -> Self {
        let norm = s.trim().to_lowercase().replace(['-', ' ', '.'], "_");
        match norm.as_str() {
            "recently_updated" | "recent" | "newest" | "newest_first" => Self::RecentlyUpdated,
            "oldest_first" | "oldest" => Self::OldestFirst,
            "a_z" | "alpha_asc" | "alphabetical" | "title" => Self::AlphaAsc,
            "z_a" | "alpha_desc" | "title_desc" => Self::AlphaDesc,
            _ => Self::Unsorted,
        }
    }

    /// Step to the next user-selectable ordering, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::SELECTABLE.iter().position(|o| *o == self);
        match idx {
            Some(i) => Self::SELECTABLE[(i + 1) % Self::SELECTABLE.len()],
            None => Self::RecentlyUpdated,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Windowing strategy for the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One page-sized slice at a time.
    #[default]
    Paginated,
    /// A growing prefix of the filtered list.
    LoadMore,
}

impl ViewMode {
    /// Parse a view mode from its settings key.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(ViewMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "paginated" | "pagination" | "pages" => Some(Self::Paginated),
            "load_more" | "loadmore" | "incremental" => Some(Self::LoadMore),
            _ => None,
        }
    }

    /// Whether the window is split into pages.
    #[must_use]
    pub const fn is_paginated(self) -> bool {
        matches!(self, Self::Paginated)
    }

    /// Return the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Paginated => Self::LoadMore,
            Self::LoadMore => Self::Paginated,
        }
    }
}

/// Why the podcast list could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// Reading a local data file failed.
    Io(String),
    /// The payload was not a JSON array of podcasts.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Status(code) => write!(f, "server returned status {code}"),
            Self::Io(e) => write!(f, "could not read data file: {e}"),
            Self::Parse(e) => write!(f, "unexpected podcast data: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Lifecycle of the one-time podcast fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Request in flight; no data yet.
    #[default]
    Loading,
    /// Request finished with an error.
    Failed(FetchError),
    /// Request finished with data.
    Ready(Vec<PodcastRecord>),
}

impl FetchState {
    /// Records available for the pipeline; empty unless [`FetchState::Ready`].
    #[must_use]
    pub fn records(&self) -> &[PodcastRecord] {
        match self {
            Self::Ready(records) => records,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchError, FetchState, PodcastRecord, SortOrder, ViewMode};

    #[test]
    /// What: `SortOrder` key/label parsing and alias handling
    ///
    /// - Input: Known keys, display labels, aliases, and an unknown key
    /// - Output: Correct mapping; unknown degrades to `Unsorted`
    fn state_sortorder_config_keys_and_labels() {
        for order in SortOrder::SELECTABLE {
            assert_eq!(SortOrder::from_config_key(order.as_config_key()), order);
            assert_eq!(SortOrder::from_config_key(order.label()), order);
        }
        assert_eq!(
            SortOrder::from_config_key("  Newest "),
            SortOrder::RecentlyUpdated
        );
        assert_eq!(SortOrder::from_config_key("alphabetical"), SortOrder::AlphaAsc);
        assert_eq!(SortOrder::from_config_key("popularity"), SortOrder::Unsorted);
    }

    #[test]
    /// What: Sort cycling visits every selectable order and wraps
    ///
    /// - Input: Start from default and from `Unsorted`
    /// - Output: Four steps return to start; `Unsorted` re-enters the cycle at the default
    fn state_sortorder_cycles() {
        let mut o = SortOrder::default();
        for _ in 0..SortOrder::SELECTABLE.len() {
            o = o.next();
        }
        assert_eq!(o, SortOrder::RecentlyUpdated);
        assert_eq!(SortOrder::AlphaAsc.next(), SortOrder::AlphaDesc);
        assert_eq!(SortOrder::Unsorted.next(), SortOrder::RecentlyUpdated);
    }

    #[test]
    /// What: View mode keys and toggling
    ///
    /// - Input: Settings keys and an unknown key
    /// - Output: Recognized keys map; unknown is `None`; toggle is an involution
    fn state_viewmode_keys_and_toggle() {
        assert_eq!(ViewMode::from_config_key("Load-More"), Some(ViewMode::LoadMore));
        assert_eq!(ViewMode::from_config_key("paginated"), Some(ViewMode::Paginated));
        assert_eq!(ViewMode::from_config_key("grid"), None);
        assert_eq!(ViewMode::Paginated.toggled().toggled(), ViewMode::Paginated);
    }

    #[test]
    /// What: Only a ready fetch exposes records
    ///
    /// - Input: Loading, failed, and ready states
    /// - Output: Empty slices for the first two; data for the last
    fn state_fetch_records_only_when_ready() {
        assert!(FetchState::Loading.records().is_empty());
        let failed = FetchState::Failed(FetchError::Status(503));
        assert!(failed.records().is_empty());
        let ready = FetchState::Ready(vec![PodcastRecord {
            id: "1".into(),
            title: "Alpha".into(),
            ..PodcastRecord::default()
        }]);
        assert_eq!(ready.records().len(), 1);
    }
}
