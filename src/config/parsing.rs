/// What: Drop a trailing `#` or `//` comment from a settings value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A marker only starts a comment when whitespace precedes it, so URL schemes, URL
///   fragments, and a leading `#` stay part of the value.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let cut = s.char_indices().find(|&(i, c)| {
        (c == '#' || (c == '/' && s[i..].starts_with("//")))
            && s[..i].ends_with(char::is_whitespace)
    });
    cut.map_or(s, |(i, _)| &s[..i]).trim()
}

/// Split a `key = value` line into a normalized key and comment-free value.
///
/// Returns `None` for blank lines, comment lines, and lines without `=`.
pub(crate) fn split_setting_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}
