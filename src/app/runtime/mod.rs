use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::args::StartupOptions;
use crate::state::{AppState, GENRES, Session};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod handlers;

use background::{spawn_event_thread, spawn_fetch, spawn_ticker};
use channels::Channels;
use handlers::handle_fetch_outcome;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment switch that skips raw-mode setup and input polling for tests.
const HEADLESS_ENV: &str = "PODCAST_EXPLORER_TEST_HEADLESS";

/// What: Run the podcast explorer end-to-end: set up the terminal, start the fetch, drive the
/// event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Merged CLI and settings values
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal errors, or on a failed fetch in
///   print mode.
///
/// Details:
/// - `--print` bypasses the terminal entirely.
/// - The event loop is the only owner of [`AppState`]; terminal events, the fetch outcome, and
///   redraw ticks are handled one at a time.
/// - The initial query is applied before the first frame, so the window starts at its origin.
pub async fn run(opts: StartupOptions) -> Result<()> {
    if opts.print {
        return super::print::run_print(&opts).await;
    }

    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut session = Session::new(&GENRES, opts.mode);
    opts.apply_query(&mut session);
    let mut app = AppState::new(session, opts.source.label());

    let mut channels = Channels::new();
    spawn_fetch(opts.source.clone(), channels.fetch_tx.clone());
    spawn_ticker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app) {
                    break;
                }
            }
            Some(outcome) = channels.fetch_rx.recv() => {
                handle_fetch_outcome(&mut app, outcome, &opts);
            }
            Some(()) = channels.tick_rx.recv() => {}
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
