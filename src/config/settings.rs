use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use super::parsing::split_setting_line;
use crate::sources::DEFAULT_API_URL;
use crate::state::{SortOrder, ViewMode};

/// Commented `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Podcast Explorer settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Endpoint returning the JSON podcast list\n\
api_url = https://podcast-api.netlify.app\n\
#\n\
# Give up on the request after this many seconds\n\
request_timeout_secs = 10\n\
#\n\
# Initial ordering: recently_updated | oldest_first | a_z | z_a\n\
default_sort = recently_updated\n\
#\n\
# Initial view: paginated | load_more\n\
default_view_mode = paginated\n";

/// User-tunable defaults read from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Podcast list endpoint.
    pub api_url: String,
    /// Request timeout in seconds; never zero.
    pub request_timeout_secs: u64,
    /// Ordering the session starts with.
    pub default_sort: SortOrder,
    /// Windowing mode the session starts with.
    pub default_view_mode: ViewMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 10,
            default_sort: SortOrder::default(),
            default_view_mode: ViewMode::default(),
        }
    }
}

impl Settings {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Values to overwrite in place
///
/// Output:
/// - None (modifies `settings` in place).
///
/// Details:
/// - Unknown keys and unusable values are logged and ignored.
/// - An unrecognized `default_sort` degrades to the identity ordering, like any other
///   unknown sort label.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_setting_line(line) else {
            continue;
        };
        match key.as_str() {
            "api_url" | "url" => {
                if val.is_empty() {
                    warn!("empty api_url in settings; keeping default");
                } else {
                    settings.api_url = val.to_string();
                }
            }
            "request_timeout_secs" | "timeout_secs" | "timeout" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => warn!(value = val, "invalid request_timeout_secs; keeping default"),
            },
            "default_sort" | "sort_order" | "sort" => {
                let order = SortOrder::from_config_key(val);
                if order == SortOrder::Unsorted && order.as_config_key() != val {
                    warn!(value = val, "unknown default_sort; falling back to unsorted");
                }
                settings.default_sort = order;
            }
            "default_view_mode" | "view_mode" => match ViewMode::from_config_key(val) {
                Some(mode) => settings.default_view_mode = mode,
                None => warn!(value = val, "unknown default_view_mode; keeping default"),
            },
            _ => warn!(key = key.as_str(), "ignoring unknown settings key"),
        }
    }
}

/// What: Load settings from disk, creating the file from the skeleton when absent.
///
/// Inputs:
/// - `path`: Location of `settings.conf`
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => info!(path = %path.display(), "wrote default settings"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not write settings"),
        }
        return settings;
    }
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut settings),
        Err(e) => warn!(path = %path.display(), error = %e, "could not read settings"),
    }
    settings
}
