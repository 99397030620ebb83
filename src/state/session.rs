//! Interactive session: the single owner of store, query, and window state.

use crate::logic::{self, Windowed};
use crate::state::genres::cycle_selector;
use crate::state::query::QueryState;
use crate::state::types::{FetchError, FetchState, GenreDefinition, PodcastRecord, SortOrder, ViewMode};
use crate::state::window::WindowState;

/// What the presentation layer should draw for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Data has not arrived yet.
    Loading,
    /// The fetch failed; no list is rendered.
    Failed(&'a FetchError),
    /// Data is available.
    Ready {
        /// Visible slice and navigation metadata.
        windowed: Windowed<'a, PodcastRecord>,
        /// Records passing the current filters.
        matched: usize,
        /// Records in the store.
        total: usize,
    },
}

/// Session state holder exposing the mutators of the presentation boundary.
///
/// Each mutator is the only writer of its field. Query mutators reset the
/// window in the same call when the value actually changes, and the
/// filtered list is recomputed only when the records or the query change.
#[derive(Debug, Clone)]
pub struct Session {
    /// Fetch lifecycle and, once ready, the raw records.
    fetch: FetchState,
    /// Genre taxonomy used for the selector.
    genres: Vec<GenreDefinition>,
    /// Current filter/sort intent.
    query: QueryState,
    /// Current window position.
    window: WindowState,
    /// Memoized engine output for `fetch` + `query`.
    filtered: Vec<PodcastRecord>,
    /// Number of times the engine has run; exposed for memoization checks.
    filter_runs: u64,
}

impl Session {
    /// What: Create a session in the loading state.
    ///
    /// Inputs:
    /// - `genres`: Static taxonomy supplied at startup
    /// - `mode`: Initial windowing strategy
    ///
    /// Output:
    /// - Session with default query and window at its initial position.
    #[must_use]
    pub fn new(genres: &[GenreDefinition], mode: ViewMode) -> Self {
        Self {
            fetch: FetchState::Loading,
            genres: genres.to_vec(),
            query: QueryState::default(),
            window: WindowState::new(mode),
            filtered: Vec::new(),
            filter_runs: 0,
        }
    }

    /// Fetch lifecycle state.
    #[must_use]
    pub const fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Genre taxonomy.
    #[must_use]
    pub fn genres(&self) -> &[GenreDefinition] {
        &self.genres
    }

    /// Current query.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// Current window.
    #[must_use]
    pub const fn window_state(&self) -> &WindowState {
        &self.window
    }

    /// Ordered, filtered records for the current query.
    #[must_use]
    pub fn filtered(&self) -> &[PodcastRecord] {
        &self.filtered
    }

    /// How many times the filter-sort engine has run.
    #[must_use]
    pub const fn filter_runs(&self) -> u64 {
        self.filter_runs
    }

    /// What: Record the outcome of the one-time fetch.
    ///
    /// Inputs:
    /// - `outcome`: Records on success, error on failure
    ///
    /// Output:
    /// - Moves the session to `Ready` or `Failed` and refreshes the filtered list.
    ///
    /// Details:
    /// - The window is left where it is; the query did not change.
    pub fn finish_fetch(&mut self, outcome: Result<Vec<PodcastRecord>, FetchError>) {
        self.fetch = match outcome {
            Ok(records) => {
                tracing::info!(count = records.len(), "podcast data ready");
                FetchState::Ready(records)
            }
            Err(e) => {
                tracing::warn!(error = %e, "podcast fetch failed");
                FetchState::Failed(e)
            }
        };
        self.recompute();
    }

    /// Run the engine over the current records and query.
    fn recompute(&mut self) {
        self.filtered = logic::filter_and_sort(self.fetch.records(), &self.query);
        self.filter_runs += 1;
    }

    /// Apply a query edit; reset the window and recompute only on a real change.
    fn edit_query<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut QueryState),
    {
        let changed = logic::apply_query_edit(&mut self.query, &mut self.window, edit);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Replace the search term. Returns `true` when it changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        self.edit_query(|q| q.search_term = term)
    }

    /// Append one character to the search term.
    pub fn push_search_char(&mut self, c: char) -> bool {
        self.edit_query(|q| q.search_term.push(c))
    }

    /// Remove the last character of the search term, if any.
    pub fn pop_search_char(&mut self) -> bool {
        self.edit_query(|q| {
            q.search_term.pop();
        })
    }

    /// Select a genre id, or `None` for all genres. Returns `true` when it changed.
    pub fn set_selected_genre(&mut self, genre: Option<u32>) -> bool {
        self.edit_query(|q| q.selected_genre = genre)
    }

    /// Step the genre selector forward or backward through "All" and the taxonomy.
    pub fn cycle_genre(&mut self, forward: bool) -> bool {
        let next = cycle_selector(self.query.selected_genre, &self.genres, forward);
        self.set_selected_genre(next)
    }

    /// Choose the ordering. Returns `true` when it changed.
    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        self.edit_query(|q| q.sort_order = order)
    }

    /// Step to the next selectable ordering.
    pub fn cycle_sort(&mut self) -> bool {
        let next = self.query.sort_order.next();
        self.set_sort_order(next)
    }

    /// Jump to a page; out-of-range requests are ignored. Returns `true` when applied.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        logic::go_to_page(&mut self.window, page, self.filtered.len())
    }

    /// Advance one page when a next page exists.
    pub fn next_page(&mut self) -> bool {
        let target = self.window.page.saturating_add(1);
        self.go_to_page(target)
    }

    /// Go back one page when a previous page exists.
    pub fn prev_page(&mut self) -> bool {
        let target = self.window.page.saturating_sub(1);
        self.go_to_page(target)
    }

    /// Reveal one more page in load-more mode.
    pub const fn load_more(&mut self) {
        logic::load_more(&mut self.window);
    }

    /// Switch between pagination and load-more without touching either counter.
    pub const fn toggle_mode(&mut self) {
        logic::toggle_mode(&mut self.window);
    }

    /// What: Compute what the presentation layer renders this cycle.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `Loading` / `Failed` while no data is usable; otherwise the visible slice with metadata.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        match &self.fetch {
            FetchState::Loading => View::Loading,
            FetchState::Failed(e) => View::Failed(e),
            FetchState::Ready(records) => View::Ready {
                windowed: logic::window(&self.filtered, &self.window),
                matched: self.filtered.len(),
                total: records.len(),
            },
        }
    }
}
