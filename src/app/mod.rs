//! Podcast explorer application: terminal runtime and headless print mode.

/// Headless print mode.
mod print;
/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use print::format_view;
pub use runtime::run;
