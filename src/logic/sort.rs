use std::cmp::Reverse;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::state::{PodcastRecord, SortOrder};
use crate::util::parse_timestamp;

/// Character class used as the first collation level.
///
/// Whitespace sorts before punctuation and symbols, which sort before digits,
/// which sort before letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    /// Spaces, tabs, and other separators.
    Space,
    /// Anything that is neither alphanumeric nor whitespace.
    Symbol,
    /// Decimal digits.
    Digit,
    /// Letters of any script.
    Letter,
}

/// Accent weight of a character that carries no accent.
const NO_ACCENT: u32 = 0;
/// Accent weight of a letter folded through [`fold_letter`] rather than decomposed.
const FOLDED_ACCENT: u32 = 1;

/// Sort key comparing titles the way a user-facing collation does.
///
/// Levels, compared in order:
/// 1. base characters (case folded, accents stripped)
/// 2. accents (unaccented before accented at the first difference)
/// 3. case (lowercase before uppercase at the first difference)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    /// Level 1 weights.
    primary: Vec<(CharClass, char)>,
    /// Level 2 weights, one per base character: the first combining mark, if any.
    accents: Vec<u32>,
    /// Level 3 weights, one per base character.
    case: Vec<bool>,
}

impl CollationKey {
    /// What: Build the collation key of a title.
    ///
    /// Inputs:
    /// - `title`: Display text
    ///
    /// Output:
    /// - Key whose `Ord` gives case- and accent-aware alphabetical order.
    ///
    /// Details:
    /// - The title is decomposed (NFD) first, so precomposed letters and letters followed by
    ///   combining marks produce the same key. Marks never reach the first level; they weigh
    ///   on the base character before them.
    /// - Letters without a canonical decomposition (`ø`, `ł`, `đ`, ...) fold by table, and
    ///   ligatures expand (`æ` reads as `ae`, `ß` as `ss`).
    #[must_use]
    pub fn new(title: &str) -> Self {
        let mut key = Self {
            primary: Vec::with_capacity(title.len()),
            accents: Vec::with_capacity(title.len()),
            case: Vec::with_capacity(title.len()),
        };
        for ch in title.nfd() {
            if is_combining_mark(ch) {
                key.mark(ch);
                continue;
            }
            let upper = ch.is_uppercase();
            for lower in ch.to_lowercase() {
                if is_combining_mark(lower) {
                    key.mark(lower);
                    continue;
                }
                match fold_letter(lower) {
                    Some((base, accent)) => {
                        for b in base.chars() {
                            key.push(b, accent, upper);
                        }
                    }
                    None => key.push(lower, NO_ACCENT, upper),
                }
            }
        }
        key
    }

    /// Append one folded character with its lower-level weights.
    fn push(&mut self, base: char, accent: u32, upper: bool) {
        self.primary.push((classify(base), base));
        self.accents.push(accent);
        self.case.push(upper);
    }

    /// Record a combining mark against the preceding base character.
    ///
    /// A mark with nothing before it has no base to weigh on and is dropped.
    fn mark(&mut self, mark: char) {
        if let Some(slot) = self.accents.last_mut()
            && *slot == NO_ACCENT
        {
            *slot = u32::from(mark);
        }
    }
}

/// Classify a folded character for the first collation level.
fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

/// What: Fold a lowercase letter that NFD leaves intact.
///
/// Inputs:
/// - `c`: Lowercase character, already decomposed
///
/// Output:
/// - `Some((base, accent))`: the spelling used at the first level and its accent weight;
///   `None` when the character is its own base.
///
/// Details:
/// - Stroked and barred letters count as accented; ligatures expand without an accent.
fn fold_letter(c: char) -> Option<(&'static str, u32)> {
    let base = match c {
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' | 'ɨ' => "i",
        'ŧ' => "t",
        'ƀ' => "b",
        'ʉ' => "u",
        'æ' => return Some(("ae", NO_ACCENT)),
        'œ' => return Some(("oe", NO_ACCENT)),
        'ß' => return Some(("ss", NO_ACCENT)),
        'þ' => return Some(("th", NO_ACCENT)),
        _ => return None,
    };
    Some((base, FOLDED_ACCENT))
}

/// What: Stable-sort records in place according to `order`.
///
/// Inputs:
/// - `records`: Filtered records, in input order
/// - `order`: Requested ordering
///
/// Output:
/// - Reorders `records`; records with equal keys keep their relative input order.
///
/// Details:
/// - Timestamps are parsed once per record; unparsable ones act as the earliest instant,
///   landing last for `RecentlyUpdated` and first for `OldestFirst`.
/// - `AlphaDesc` is a stable descending sort, not a reversal of the ascending result, so
///   equal titles stay in input order in both directions.
/// - `Unsorted` leaves the slice untouched.
pub fn sort_records(records: &mut [PodcastRecord], order: SortOrder) {
    match order {
        SortOrder::RecentlyUpdated => {
            records.sort_by_cached_key(|r| Reverse(parse_timestamp(&r.updated)));
        }
        SortOrder::OldestFirst => {
            records.sort_by_cached_key(|r| parse_timestamp(&r.updated));
        }
        SortOrder::AlphaAsc => {
            records.sort_by_cached_key(|r| CollationKey::new(&r.title));
        }
        SortOrder::AlphaDesc => {
            records.sort_by_cached_key(|r| Reverse(CollationKey::new(&r.title)));
        }
        SortOrder::Unsorted => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, title: &str, updated: &str) -> PodcastRecord {
        PodcastRecord {
            id: id.to_string(),
            title: title.to_string(),
            updated: updated.to_string(),
            ..PodcastRecord::default()
        }
    }

    fn ids(records: &[PodcastRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    /// What: Collation ignores case and accents at the first level
    ///
    /// - Input: "apple", "Banana", "Éclair", "zebra"
    /// - Output: Alphabetical by base letter, not by byte value
    fn sort_collation_case_and_accent_insensitive_first() {
        let mut v = vec![
            rec("z", "zebra", ""),
            rec("e", "Éclair", ""),
            rec("b", "Banana", ""),
            rec("a", "apple", ""),
        ];
        sort_records(&mut v, SortOrder::AlphaAsc);
        assert_eq!(ids(&v), vec!["a", "b", "e", "z"]);
    }

    #[test]
    /// What: Lower levels break ties between otherwise equal titles
    ///
    /// - Input: "Resume", "résumé", "resume"
    /// - Output: unaccented lowercase, unaccented uppercase, accented
    fn sort_collation_secondary_and_tertiary_levels() {
        assert!(CollationKey::new("resume") < CollationKey::new("Resume"));
        assert!(CollationKey::new("Resume") < CollationKey::new("résumé"));
        assert!(CollationKey::new("résumé") < CollationKey::new("resumes"));
        assert!(CollationKey::new("Straße") < CollationKey::new("Strasses"));
    }

    #[test]
    /// What: Decomposed accents sort like their precomposed forms
    ///
    /// - Input: "Résumé Talk" written with combining acute marks, "Rerun", and the
    ///   precomposed "Résumé Talk"
    /// - Output: "Rerun" first; both spellings of "Résumé Talk" share one key
    fn sort_collation_combining_marks() {
        let mut v = vec![
            rec("nfd", "Re\u{301}sume\u{301} Talk", ""),
            rec("rerun", "Rerun", ""),
        ];
        sort_records(&mut v, SortOrder::AlphaAsc);
        assert_eq!(ids(&v), vec!["rerun", "nfd"]);
        assert_eq!(
            CollationKey::new("Re\u{301}sume\u{301} Talk"),
            CollationKey::new("R\u{e9}sum\u{e9} Talk")
        );
        assert!(CollationKey::new("Resume Talk") < CollationKey::new("Re\u{301}sume\u{301} Talk"));
    }

    #[test]
    /// What: Accented letters beyond Latin-1 fold to their base letter
    ///
    /// - Input: "Știri", "Tango", "Zebra", plus caron and horn letters
    /// - Output: s < t < z; "ǎ", "ơ", "ư" sort with a, o, u rather than after z
    fn sort_collation_extended_latin() {
        let mut v = vec![
            rec("z", "Zebra", ""),
            rec("t", "Tango", ""),
            rec("s", "\u{218}tiri", ""),
        ];
        sort_records(&mut v, SortOrder::AlphaAsc);
        assert_eq!(ids(&v), vec!["s", "t", "z"]);
        assert!(CollationKey::new("\u{1ce}b") < CollationKey::new("ac"));
        assert!(CollationKey::new("\u{1a1}n") < CollationKey::new("op"));
        assert!(CollationKey::new("\u{1b0}a") < CollationKey::new("ub"));
        assert!(CollationKey::new("\u{142}odz") < CollationKey::new("lp"));
    }

    #[test]
    /// What: Spaces, symbols, and digits sort before letters
    ///
    /// - Input: Titles starting with a letter, digit, symbol, and space
    /// - Output: space < symbol < digit < letter
    fn sort_collation_character_classes() {
        assert!(CollationKey::new(" x") < CollationKey::new("#x"));
        assert!(CollationKey::new("#x") < CollationKey::new("9x"));
        assert!(CollationKey::new("9x") < CollationKey::new("ax"));
        assert!(CollationKey::new("a b") < CollationKey::new("ab"));
    }

    #[test]
    /// What: Recency sorts put malformed dates last and keep ties stable
    ///
    /// - Input: Two records sharing a date, one newer, one malformed
    /// - Output: newest, tie pair in input order, malformed last; reverse for oldest-first
    fn sort_by_updated_with_malformed_and_ties() {
        let base = vec![
            rec("t1", "A", "2024-01-01"),
            rec("bad", "B", "not a date"),
            rec("new", "C", "2024-06-01T08:00:00Z"),
            rec("t2", "D", "2024-01-01T00:00:00Z"),
        ];
        let mut recent = base.clone();
        sort_records(&mut recent, SortOrder::RecentlyUpdated);
        assert_eq!(ids(&recent), vec!["new", "t1", "t2", "bad"]);

        let mut oldest = base;
        sort_records(&mut oldest, SortOrder::OldestFirst);
        assert_eq!(ids(&oldest), vec!["bad", "t1", "t2", "new"]);
    }

    #[test]
    /// What: Descending title sort is stable for equal titles
    ///
    /// - Input: Two "Same" titles around "Zed" and "Alpha"
    /// - Output: Zed, Same(first), Same(second), Alpha
    fn sort_alpha_desc_is_stable() {
        let mut v = vec![
            rec("s1", "Same", ""),
            rec("a", "Alpha", ""),
            rec("s2", "Same", ""),
            rec("z", "Zed", ""),
        ];
        sort_records(&mut v, SortOrder::AlphaDesc);
        assert_eq!(ids(&v), vec!["z", "s1", "s2", "a"]);
        sort_records(&mut v, SortOrder::AlphaAsc);
        assert_eq!(ids(&v), vec!["a", "s1", "s2", "z"]);
    }

    #[test]
    /// What: Unsorted order is the identity
    ///
    /// - Input: Records in arbitrary order
    /// - Output: Same order
    fn sort_unsorted_keeps_input_order() {
        let mut v = vec![rec("2", "B", "2020-01-01"), rec("1", "A", "2021-01-01")];
        sort_records(&mut v, SortOrder::Unsorted);
        assert_eq!(ids(&v), vec!["2", "1"]);
    }
}
