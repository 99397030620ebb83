//! Small helpers shared by the sources, pipeline, and UI layers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Field deserializers that degrade malformed JSON values to defaults.
///
/// Used through `#[serde(deserialize_with = ...)]` so one bad field never rejects a record.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// What: Read a text field from whatever JSON value the source sent.
    ///
    /// Output:
    /// - Strings verbatim, numbers in decimal, anything else empty.
    ///
    /// # Errors
    /// - Only when the input is not JSON at all.
    pub fn text<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }

    /// Non-blank strings only; anything else is `None`.
    ///
    /// # Errors
    /// - Only when the input is not JSON at all.
    pub fn non_empty_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(d)? {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
    }

    /// What: Read a small non-negative count.
    ///
    /// Output:
    /// - `Some(n)` for numbers or numeric strings that fit in `u32`; `None` otherwise.
    ///
    /// # Errors
    /// - Only when the input is not JSON at all.
    pub fn count<'de, D>(d: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(count_of(&Value::deserialize(d)?))
    }

    /// Numeric ids from an array; entries that are not counts are dropped.
    ///
    /// # Errors
    /// - Only when the input is not JSON at all.
    pub fn genre_ids<'de, D>(d: D) -> Result<Vec<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items.iter().filter_map(count_of).collect(),
            _ => Vec::new(),
        })
    }

    /// Non-negative integer fitting in `u32`, from a number or numeric string.
    fn count_of(v: &Value) -> Option<u32> {
        match v {
            Value::Number(n) => n.as_u64().and_then(|u| u32::try_from(u).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// What: Parse a last-updated timestamp in the formats podcast feeds emit.
///
/// Inputs:
/// - `raw`: Timestamp text
///
/// Output:
/// - `Some(DateTime<Utc>)` when recognized; `None` for empty or malformed text.
///
/// Details:
/// - Accepts RFC 3339 (with offset or `Z`), offset-less ISO date-times
///   (read as UTC), `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD` (midnight UTC).
/// - Callers order `None` before every parsed value, so malformed input sorts as earliest.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Display form of a raw timestamp: `YYYY-MM-DD`, or the raw text when unparsable.
#[must_use]
pub fn format_updated(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.trim().to_string(),
        |dt| dt.format("%Y-%m-%d").to_string(),
    )
}

/// Current UTC time formatted for log lines (`YYYY-MM-DD HH:MM:SS`).
#[must_use]
pub fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
