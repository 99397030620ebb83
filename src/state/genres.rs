//! Static genre taxonomy supplied at startup.

use super::types::GenreDefinition;

/// Genre table shipped with the application; ids match `PodcastRecord::genres`.
pub const GENRES: [GenreDefinition; 9] = [
    GenreDefinition {
        id: 1,
        title: "Personal Growth",
    },
    GenreDefinition {
        id: 2,
        title: "Investigative Journalism",
    },
    GenreDefinition {
        id: 3,
        title: "History",
    },
    GenreDefinition {
        id: 4,
        title: "Comedy",
    },
    GenreDefinition {
        id: 5,
        title: "Entertainment",
    },
    GenreDefinition {
        id: 6,
        title: "Business",
    },
    GenreDefinition {
        id: 7,
        title: "Fiction",
    },
    GenreDefinition {
        id: 8,
        title: "News",
    },
    GenreDefinition {
        id: 9,
        title: "Kids and Family",
    },
];

/// What: Resolve genre ids to their display labels.
///
/// Inputs:
/// - `ids`: Genre ids of one record
/// - `genres`: Taxonomy to look labels up in
///
/// Output:
/// - Labels in the order of `ids`; ids missing from the taxonomy are skipped.
#[must_use]
pub fn genre_titles(ids: &[u32], genres: &[GenreDefinition]) -> Vec<&'static str> {
    ids.iter()
        .filter_map(|id| genres.iter().find(|g| g.id == *id).map(|g| g.title))
        .collect()
}

/// Label for a genre selector value; `None` reads as "All Genres".
#[must_use]
pub fn selector_label(selected: Option<u32>, genres: &[GenreDefinition]) -> String {
    match selected {
        None => "All Genres".to_string(),
        Some(id) => genres
            .iter()
            .find(|g| g.id == id)
            .map_or_else(|| format!("Genre {id}"), |g| g.title.to_string()),
    }
}

/// What: Step the genre selector through "All" and every taxonomy entry.
///
/// Inputs:
/// - `selected`: Current selector value
/// - `genres`: Taxonomy in display order
/// - `forward`: Direction of travel
///
/// Output:
/// - The neighbouring selector value; "All" sits before the first and after the last entry.
///
/// Details:
/// - A selector holding an id that is not in the taxonomy restarts from "All".
#[must_use]
pub fn cycle_selector(selected: Option<u32>, genres: &[GenreDefinition], forward: bool) -> Option<u32> {
    if genres.is_empty() {
        return None;
    }
    let pos = selected.and_then(|id| genres.iter().position(|g| g.id == id));
    match (pos, forward) {
        (None, true) => genres.first().map(|g| g.id),
        (None, false) => genres.last().map(|g| g.id),
        (Some(i), true) => genres.get(i + 1).map(|g| g.id),
        (Some(0), false) => None,
        (Some(i), false) => genres.get(i - 1).map(|g| g.id),
    }
}
