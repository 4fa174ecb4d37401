//! Marker vocabulary shared by templates and the compositor
//!
//! A lesson marker is `<weekday prefix><slot suffix>`, e.g. `MonLessOne`.
//! Date markers are `<weekday>Date`, e.g. `MonDate`.

use crate::types::Weekday;

/// Suffix tokens for lesson slots 1 through 7
pub const SLOT_SUFFIXES: [&str; 7] = ["One", "Two", "Three", "Four", "Five", "Six", "Seven"];

/// Suffix used for slot numbers outside 1..=7
pub const UNKNOWN_SUFFIX: &str = "Unknown";

/// Map a string-encoded slot number to its marker suffix.
pub fn slot_suffix(number: &str) -> &'static str {
    match number.trim().parse::<usize>() {
        Ok(n @ 1..=7) => SLOT_SUFFIXES[n - 1],
        _ => UNKNOWN_SUFFIX,
    }
}

impl Weekday {
    /// Prefix of this day's lesson markers.
    ///
    /// Saturday uses the `Sun` token, and Sunday has no markers at all;
    /// existing templates are built around this naming.
    pub fn lesson_prefix(self) -> Option<&'static str> {
        match self {
            Weekday::Monday => Some("MonLess"),
            Weekday::Tuesday => Some("TuesLess"),
            Weekday::Wednesday => Some("WednesLess"),
            Weekday::Thursday => Some("ThursLess"),
            Weekday::Friday => Some("FriLess"),
            Weekday::Saturday => Some("SunLess"),
            Weekday::Sunday => None,
        }
    }

    /// Marker replaced with this day's `dd.MM` date.
    pub fn date_marker(self) -> Option<&'static str> {
        match self {
            Weekday::Monday => Some("MonDate"),
            Weekday::Tuesday => Some("TuesDate"),
            Weekday::Wednesday => Some("WednesDate"),
            Weekday::Thursday => Some("ThursDate"),
            Weekday::Friday => Some("FriDate"),
            Weekday::Saturday => Some("SunDate"),
            Weekday::Sunday => None,
        }
    }
}

/// Lesson marker prefixes of every mapped weekday.
pub fn lesson_prefixes() -> Vec<&'static str> {
    Weekday::ALL
        .into_iter()
        .filter_map(Weekday::lesson_prefix)
        .collect()
}

/// Date markers of every mapped weekday.
pub fn date_markers() -> Vec<&'static str> {
    Weekday::ALL
        .into_iter()
        .filter_map(Weekday::date_marker)
        .collect()
}

pub fn lesson_marker(prefix: &str, slot_number: &str) -> String {
    format!("{}{}", prefix, slot_suffix(slot_number))
}

/// Every lesson marker a template may contain, in weekday then slot order.
pub fn all_lesson_markers() -> Vec<String> {
    lesson_prefixes()
        .into_iter()
        .flat_map(|prefix| SLOT_SUFFIXES.iter().map(move |suffix| format!("{prefix}{suffix}")))
        .collect()
}
