//! Podcast Explorer binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use podcast_explorer::{app, args, config, util};

/// Log line timestamp formatter.
struct ExplorerTimer;

impl tracing_subscriber::fmt::time::FormatTime for ExplorerTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let s = util::now_stamp(); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the level filter: `RUST_LOG` wins, then the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize tracing writing to `<config>/logs/podcast-explorer.log`, or stderr as fallback.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("podcast-explorer.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ExplorerTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked on the log file
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ExplorerTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = config::load_settings(&config::settings_path());
    let opts = args::resolve_startup(&cli, &settings);
    tracing::info!(
        source = %opts.source.label(),
        mode = ?opts.mode,
        print = opts.print,
        "Podcast Explorer starting"
    );
    let code = match app::run(opts).await {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %err, "Application error");
            eprintln!("podcast-explorer: {err}");
            1
        }
    };
    tracing::info!("Podcast Explorer exited");
    if code != 0 {
        std::process::exit(code);
    }
}
