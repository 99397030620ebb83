//! Text helpers shared by the panes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic::WindowMeta;

/// What: Shorten text to a display width, appending an ellipsis when cut.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Available columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix plus `…` no wider than `max`.
///
/// Details:
/// - Uses display width, so wide CJK characters count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: One-line summary of the window position for the footer.
///
/// Inputs:
/// - `meta`: Window metadata
/// - `shown`: Rows currently visible
/// - `matched`: Records passing the filters
///
/// Output:
/// - "Page X of Y" or "Showing N of M", with "No results" for an empty list.
#[must_use]
pub fn window_summary(meta: WindowMeta, shown: usize, matched: usize) -> String {
    if matched == 0 {
        return "No results".to_string();
    }
    match meta {
        WindowMeta::Pagination {
            page, total_pages, ..
        } => format!("Page {page} of {total_pages}"),
        WindowMeta::LoadMore { .. } => format!("Showing {shown} of {matched}"),
    }
}

/// Braille spinner frame for the loading pane, advancing every 250ms.
#[must_use]
pub fn spinner_frame() -> char {
    const FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
    let ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    let idx = usize::try_from(ms / 250 % 8).unwrap_or(0);
    FRAMES[idx]
}
