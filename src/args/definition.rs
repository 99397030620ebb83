//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Podcast Explorer - browse a podcast directory in the terminal
#[derive(Parser, Debug)]
#[command(name = "podcast-explorer")]
#[command(version)]
#[command(about = "Search, filter, sort, and page through a podcast directory", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Podcast list endpoint (overrides `api_url` in settings.conf)
    #[arg(long)]
    pub url: Option<String>,

    /// Read the podcast list from a local JSON file instead of the network
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Initial title search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Initial genre id (1-9)
    #[arg(short, long)]
    pub genre: Option<u32>,

    /// Initial sort order (recently_updated, oldest_first, a_z, z_a)
    #[arg(long)]
    pub sort: Option<String>,

    /// Start in load-more mode instead of pagination
    #[arg(long)]
    pub load_more: bool,

    /// Initial page (ignored when out of range)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Print the visible window to stdout and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level from the command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `"debug"` when `--verbose` is set, otherwise the `--log-level` value.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
