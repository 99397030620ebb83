use crate::args::Args;
use crate::config::Settings;
use crate::sources::SourceConfig;
use crate::state::{Session, SortOrder, ViewMode};

/// Everything the runtime needs to start, after merging CLI and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOptions {
    /// Fetch endpoint or file.
    pub source: SourceConfig,
    /// Initial windowing mode.
    pub mode: ViewMode,
    /// Initial search term.
    pub search: String,
    /// Initial genre id.
    pub genre: Option<u32>,
    /// Initial ordering.
    pub sort: SortOrder,
    /// Page to jump to once data arrives.
    pub page: Option<usize>,
    /// Headless print mode.
    pub print: bool,
}

/// What: Merge command-line arguments over settings.
///
/// Inputs:
/// - `args`: Parsed CLI
/// - `settings`: Values from `settings.conf`
///
/// Output:
/// - `StartupOptions` where every CLI value overrides its setting.
#[must_use]
pub fn resolve_startup(args: &Args, settings: &Settings) -> StartupOptions {
    let source = SourceConfig {
        api_url: args.url.clone().unwrap_or_else(|| settings.api_url.clone()),
        file: args.file.clone(),
        timeout: settings.request_timeout(),
    };
    let mode = if args.load_more {
        ViewMode::LoadMore
    } else {
        settings.default_view_mode
    };
    StartupOptions {
        source,
        mode,
        search: args.search.clone().unwrap_or_default(),
        genre: args.genre,
        sort: args
            .sort
            .as_deref()
            .map_or(settings.default_sort, SortOrder::from_config_key),
        page: args.page,
        print: args.print,
    }
}

impl StartupOptions {
    /// What: Push the initial query into a session through its mutators.
    ///
    /// Inputs:
    /// - `session`: Session to configure
    ///
    /// Output:
    /// - None; the session query matches the options and the window sits at its start.
    ///
    /// Details:
    /// - The requested page is not applied here; it needs data and goes through
    ///   [`StartupOptions::apply_page`] after the fetch.
    pub fn apply_query(&self, session: &mut Session) {
        session.set_search_term(self.search.clone());
        session.set_selected_genre(self.genre);
        session.set_sort_order(self.sort);
    }

    /// Jump to the requested page once records are available; out-of-range pages are ignored.
    pub fn apply_page(&self, session: &mut Session) {
        if let Some(page) = self.page
            && !session.go_to_page(page)
        {
            tracing::warn!(page, "requested start page is out of range");
        }
    }
}
