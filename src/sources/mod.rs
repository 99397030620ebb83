//! Data retrieval: the one-time podcast fetch from the API or a local file.

mod podcasts;

pub use podcasts::{
    DEFAULT_API_URL, FetchOutcome, SourceConfig, fetch_podcasts, load_podcasts_file,
    parse_podcasts,
};
