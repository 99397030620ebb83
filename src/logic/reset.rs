use crate::state::{PAGE_SIZE, QueryState, WindowState};

/// What: Restore the window to its initial position.
///
/// Inputs:
/// - `window`: Window to reset
///
/// Output:
/// - `page = 1` and `visible_count = PAGE_SIZE`; the mode is left alone.
pub const fn reset_window(window: &mut WindowState) {
    window.page = 1;
    window.visible_count = PAGE_SIZE;
}

/// What: Apply a query edit and reset the window when the query changed by value.
///
/// Inputs:
/// - `query`: Current query, updated in place
/// - `window`: Window to reset on change
/// - `edit`: Mutation to apply to the query
///
/// Output:
/// - `true` when the query changed (and the window was reset); `false` for a no-op edit.
///
/// Details:
/// - The reset runs synchronously inside the same transition, so no render can observe the new
///   query with the old window position.
/// - Assigning a value equal to the current one is not a change and leaves the window untouched.
pub fn apply_query_edit<F>(query: &mut QueryState, window: &mut WindowState, edit: F) -> bool
where
    F: FnOnce(&mut QueryState),
{
    let before = query.clone();
    edit(query);
    if *query == before {
        return false;
    }
    reset_window(window);
    tracing::debug!(
        search = %query.search_term,
        genre = ?query.selected_genre,
        sort = %query.sort_order,
        "query changed; window reset"
    );
    true
}
