//! Podcast list fetcher and lenient payload parser.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::state::{FetchError, PodcastRecord};

/// Public endpoint serving the podcast preview list.
pub const DEFAULT_API_URL: &str = "https://podcast-api.netlify.app";

/// Outcome delivered to the session exactly once.
pub type FetchOutcome = std::result::Result<Vec<PodcastRecord>, FetchError>;

/// Where and how to fetch the podcast list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// HTTP endpoint returning the JSON array.
    pub api_url: String,
    /// Local JSON file; when set, the network is not touched.
    pub file: Option<PathBuf>,
    /// Overall request timeout.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            file: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl SourceConfig {
    /// Human-readable origin of the data for the header and logs.
    #[must_use]
    pub fn label(&self) -> String {
        self.file
            .as_ref()
            .map_or_else(|| self.api_url.clone(), |p| p.display().to_string())
    }
}

/// What: Fetch the podcast list once.
///
/// Inputs:
/// - `cfg`: Endpoint or file, plus timeout
///
/// Output:
/// - `Ok(records)` in source order; `Err(FetchError)` describing the failure.
///
/// Details:
/// - A configured file wins over the URL.
/// - Non-success HTTP statuses become [`FetchError::Status`]; the body is only logged.
/// - No retries; the caller decides what to do with a failure.
pub async fn fetch_podcasts(cfg: &SourceConfig) -> FetchOutcome {
    if let Some(path) = &cfg.file {
        let path = path.clone();
        return tokio::task::spawn_blocking(move || load_podcasts_file(&path))
            .await
            .unwrap_or_else(|e| Err(FetchError::Io(e.to_string())));
    }

    let client = reqwest::Client::builder()
        .timeout(cfg.timeout)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let resp = client
        .get(&cfg.api_url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    info!(
        status = status.as_u16(),
        bytes = body.len(),
        url = %cfg.api_url,
        "fetched podcast list"
    );
    if !status.is_success() {
        let preview: String = body.chars().take(300).collect();
        warn!(
            status = status.as_u16(),
            preview = preview,
            "podcast endpoint returned non-success status"
        );
        return Err(FetchError::Status(status.as_u16()));
    }
    parse_podcasts(&body)
}

/// What: Read and parse a podcast list stored on disk.
///
/// Inputs:
/// - `path`: JSON file holding the same payload the API returns
///
/// Output:
/// - Parsed records, [`FetchError::Io`] when unreadable, or [`FetchError::Parse`].
pub fn load_podcasts_file(path: &std::path::Path) -> FetchOutcome {
    let body = std::fs::read_to_string(path).map_err(|e| FetchError::Io(e.to_string()))?;
    info!(path = %path.display(), bytes = body.len(), "read podcast file");
    parse_podcasts(&body)
}

/// What: Turn a JSON payload into podcast records.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - Records in payload order; [`FetchError::Parse`] when the payload is not JSON or not an array.
///
/// Details:
/// - Entries that are not objects are skipped, as are objects serde rejects outright
///   (for example both `updated` and `lastUpdated` present).
/// - Missing or mistyped fields degrade per record: empty title, no genres, empty timestamp.
/// - Genre ids may be numbers or numeric strings; anything else is dropped.
pub fn parse_podcasts(body: &str) -> FetchOutcome {
    let v: Value = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    let Some(entries) = v.as_array() else {
        return Err(FetchError::Parse("expected a JSON array".to_string()));
    };
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries.iter().filter(|e| e.is_object()) {
        match PodcastRecord::deserialize(entry) {
            Ok(record) => {
                if record.title.is_empty() || record.updated.is_empty() {
                    warn!(id = %record.id, "podcast entry missing title or updated timestamp");
                }
                records.push(record);
            }
            Err(e) => warn!(error = %e, "ignored unreadable podcast entry"),
        }
    }
    let skipped = entries.len() - records.len();
    if skipped > 0 {
        warn!(skipped, "ignored entries in podcast payload");
    }
    info!(count = records.len(), "parsed podcast list");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Well-formed payload maps every field
    ///
    /// - Input: One complete podcast object
    /// - Output: Record with id stringified, genres, seasons, image
    fn sources_parse_full_entry() {
        let body = r#"[{"id":"10716","title":"Something Was Wrong","description":"d",
            "seasons":14,"image":"https://x/y.jpg","genres":[2,"1"],
            "updated":"2022-11-03T07:00:00.000Z"}]"#;
        let out = parse_podcasts(body).expect("parse");
        assert_eq!(out.len(), 1);
        let r = &out[0];
        assert_eq!(r.id, "10716");
        assert_eq!(r.title, "Something Was Wrong");
        assert_eq!(r.genres, vec![2, 1]);
        assert_eq!(r.seasons, Some(14));
        assert_eq!(r.image.as_deref(), Some("https://x/y.jpg"));
        assert_eq!(r.updated, "2022-11-03T07:00:00.000Z");
    }

    #[test]
    /// What: Malformed entries degrade instead of failing the batch
    ///
    /// - Input: Numeric id, missing title, genres not an array, junk genre ids, a bare number entry
    /// - Output: Two records kept with defaults; the number entry skipped
    fn sources_parse_degrades_per_record() {
        let body = r#"[{"id":7,"genres":"comedy"},{"title":"T","genres":[1,"x",null,-3]},42]"#;
        let out = parse_podcasts(body).expect("parse");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "7");
        assert!(out[0].title.is_empty());
        assert!(out[0].genres.is_empty());
        assert_eq!(out[1].genres, vec![1]);
        assert!(out[1].updated.is_empty());
    }

    #[test]
    /// What: Alternate and mistyped fields are read through the lenient record decoder
    ///
    /// - Input: `lastUpdated` instead of `updated`, numeric-string seasons, numeric title,
    ///   null description, blank image; then an object carrying both timestamp keys
    /// - Output: Timestamp taken from the alias; seasons parsed; title stringified;
    ///   defaults elsewhere; the ambiguous object skipped
    fn sources_parse_lenient_fields() {
        let body = r#"[{"id":"3","title":1984,"lastUpdated":"2024-02-02","seasons":"2",
            "description":null,"image":"  "},
            {"id":"4","updated":"2024-01-01","lastUpdated":"2024-01-02"}]"#;
        let out = parse_podcasts(body).expect("parse");
        assert_eq!(out.len(), 1);
        let r = &out[0];
        assert_eq!(r.title, "1984");
        assert_eq!(r.updated, "2024-02-02");
        assert_eq!(r.seasons, Some(2));
        assert!(r.description.is_empty());
        assert_eq!(r.image, None);
    }

    #[test]
    /// What: Non-array or non-JSON payloads are parse failures
    ///
    /// - Input: An object, then garbage text
    /// - Output: `FetchError::Parse` for both
    fn sources_parse_rejects_non_array() {
        assert!(matches!(parse_podcasts(r#"{"a":1}"#), Err(FetchError::Parse(_))));
        assert!(matches!(parse_podcasts("<html>"), Err(FetchError::Parse(_))));
        assert_eq!(parse_podcasts("[]"), Ok(Vec::new()));
    }

    #[test]
    /// What: File source reads from disk and reports missing files as IO errors
    ///
    /// - Input: Temp file with one entry; a path that does not exist
    /// - Output: One record; `FetchError::Io`
    fn sources_load_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("shows.json");
        std::fs::write(&path, r#"[{"id":"1","title":"A","updated":"2024-01-01"}]"#)
            .expect("write");
        assert_eq!(load_podcasts_file(&path).expect("load").len(), 1);
        assert!(matches!(
            load_podcasts_file(&dir.path().join("missing.json")),
            Err(FetchError::Io(_))
        ));
    }

    #[tokio::test]
    /// What: A configured file takes precedence over the URL
    ///
    /// - Input: `SourceConfig` with an unreachable URL and a valid file
    /// - Output: Records from the file
    async fn sources_fetch_prefers_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("shows.json");
        std::fs::write(&path, r#"[{"id":"1","title":"A"}]"#).expect("write");
        let cfg = SourceConfig {
            api_url: "http://127.0.0.1:9/never".to_string(),
            file: Some(path),
            ..SourceConfig::default()
        };
        assert_eq!(cfg.label(), cfg.file.as_ref().expect("file").display().to_string());
        assert_eq!(fetch_podcasts(&cfg).await.expect("fetch").len(), 1);
    }
}
