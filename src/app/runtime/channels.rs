use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::FetchOutcome;

/// Channel endpoints connecting the event loop with its producers.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Tells the input thread to stop polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// The one fetch outcome.
    pub fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    /// Receiving side of the fetch outcome.
    pub fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Redraw ticks while loading.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of redraw ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// Create all channel pairs.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_tx,
            fetch_rx,
            tick_tx,
            tick_rx,
        }
    }
}
