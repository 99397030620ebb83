//! Command-line arguments and how they combine with `settings.conf`.

mod definition;
mod resolve;

pub use definition::{Args, determine_log_level};
pub use resolve::{StartupOptions, resolve_startup};
