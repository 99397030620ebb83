use std::fmt::Write as _;
use std::io::Write as _;

use crate::args::StartupOptions;
use crate::logic::WindowMeta;
use crate::sources::fetch_podcasts;
use crate::state::{GENRES, Session, View, ViewMode, genre_titles, selector_label};
use crate::util::format_updated;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Fetch once, apply the startup query, print the visible window, and return.
///
/// Inputs:
/// - `opts`: Merged CLI and settings values
///
/// Output:
/// - `Ok(())` after printing; `Err` carrying the [`crate::state::FetchError`] when the fetch failed.
pub async fn run_print(opts: &StartupOptions) -> Result<()> {
    let mut session = Session::new(&GENRES, opts.mode);
    opts.apply_query(&mut session);
    let records = match fetch_podcasts(&opts.source).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "print mode: fetch failed");
            return Err(Box::new(e));
        }
    };
    session.finish_fetch(Ok(records));
    opts.apply_page(&mut session);

    let mut out = std::io::stdout().lock();
    out.write_all(format_view(&session).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// What: Render the current view as plain text.
///
/// Inputs:
/// - `session`: Session to describe
///
/// Output:
/// - Header line with the query, one line per visible record, and a footer with window metadata.
///
/// Details:
/// - Record numbers are positions in the whole filtered list, not in the visible slice.
#[must_use]
pub fn format_view(session: &Session) -> String {
    let q = session.query();
    let mode = match session.window_state().mode {
        ViewMode::Paginated => "paginated",
        ViewMode::LoadMore => "load more",
    };
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Search: \"{}\" | Genre: {} | Sort: {} | Mode: {mode}",
        q.search_term,
        selector_label(q.selected_genre, session.genres()),
        q.sort_order,
    );
    match session.view() {
        View::Loading => s.push_str("Loading podcasts...\n"),
        View::Failed(e) => {
            let _ = writeln!(s, "Error: {e}");
        }
        View::Ready {
            windowed,
            matched,
            total,
        } => {
            let offset = match windowed.meta {
                WindowMeta::Pagination { page, .. } => (page - 1) * crate::state::PAGE_SIZE,
                WindowMeta::LoadMore { .. } => 0,
            };
            if windowed.visible.is_empty() {
                s.push_str("No podcasts match.\n");
            }
            for (i, r) in windowed.visible.iter().enumerate() {
                let labels = genre_titles(&r.genres, session.genres()).join(", ");
                let seasons = r
                    .seasons
                    .map_or_else(String::new, |n| format!(" | {n} season{}", if n == 1 { "" } else { "s" }));
                let _ = writeln!(
                    s,
                    "{:>4}. {} [{labels}]{seasons} | updated {}",
                    offset + i + 1,
                    r.title,
                    format_updated(&r.updated),
                );
            }
            match windowed.meta {
                WindowMeta::Pagination {
                    page,
                    total_pages,
                    can_prev,
                    can_next,
                } => {
                    let _ = writeln!(
                        s,
                        "Page {page} of {total_pages} | prev: {} | next: {} | {matched} of {total} match",
                        yes_no(can_prev),
                        yes_no(can_next),
                    );
                }
                WindowMeta::LoadMore { has_more, .. } => {
                    let _ = writeln!(
                        s,
                        "Showing {} of {matched} | more: {} | {total} total",
                        windowed.visible.len(),
                        yes_no(has_more),
                    );
                }
            }
        }
    }
    s
}

/// `yes` / `no` for footer flags.
const fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
