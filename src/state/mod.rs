//! Podcast explorer state: value types, the genre taxonomy, query and
//! window state, and the session holder that ties them together.

pub mod app_state;
pub mod genres;
pub mod query;
pub mod session;
pub mod types;
pub mod window;

pub use app_state::AppState;
pub use genres::{GENRES, cycle_selector, genre_titles, selector_label};
pub use query::QueryState;
pub use session::{Session, View};
pub use types::{
    FetchError, FetchState, GenreDefinition, PAGE_SIZE, PodcastRecord, SortOrder, ViewMode,
};
pub use window::WindowState;

