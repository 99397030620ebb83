use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{FetchOutcome, SourceConfig, fetch_podcasts};

/// What: Spawn the one-time podcast fetch.
///
/// Inputs:
/// - `source`: Endpoint or file to read
/// - `fetch_tx`: Channel receiving the single outcome
///
/// Output:
/// - None; the outcome arrives on `fetch_tx`.
///
/// Details:
/// - The task is neither retried nor cancelled; if the loop already exited the send is dropped.
pub fn spawn_fetch(source: SourceConfig, fetch_tx: mpsc::UnboundedSender<FetchOutcome>) {
    tokio::spawn(async move {
        tracing::info!(source = %source.label(), "fetching podcast list");
        let outcome = fetch_podcasts(&source).await;
        let _ = fetch_tx.send(outcome);
    });
}

/// Spawn a ticker that asks for a redraw every 250ms so the loading pane animates.
pub fn spawn_ticker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the terminal input reader.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel for terminal events
/// - `event_thread_cancelled`: Flag checked between polls
///
/// Output:
/// - None.
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is seen promptly.
/// - Transient read errors are ignored; a closed channel ends the thread.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
