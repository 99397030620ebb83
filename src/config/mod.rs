//! Configuration for the podcast explorer.
//!
//! Resolves the per-user config directory, reads `settings.conf`, and
//! writes a commented skeleton the first time the app runs.

/// Line-level parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings type, parser, and loader.
mod settings;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{SETTINGS_SKELETON_CONTENT, Settings, load_settings, parse_settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
