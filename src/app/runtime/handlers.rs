use crate::args::StartupOptions;
use crate::sources::FetchOutcome;
use crate::state::AppState;

/// What: Apply the fetch outcome to the application state.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Records or error from the fetch task
/// - `opts`: Startup options carrying the requested start page
///
/// Output:
/// - None; the session moves to ready or failed and the highlight is clamped.
pub fn handle_fetch_outcome(app: &mut AppState, outcome: FetchOutcome, opts: &StartupOptions) {
    let failed = outcome.is_err();
    app.session.finish_fetch(outcome);
    if !failed {
        opts.apply_page(&mut app.session);
    }
    app.select_first();
}
