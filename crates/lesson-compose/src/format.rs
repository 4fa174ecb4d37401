//! Text formatting for lesson cells

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static ROOM_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(-\d+)?$").unwrap());

/// Numeric sub-group id from a raw label; 0 means the whole class.
pub fn subgroup_id(label: &str) -> u32 {
    DIGITS
        .find(&label.to_uppercase())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// `ГР1`-style label, or an empty string when the label carries no id.
pub fn subgroup_label(label: &str, prefix: &str) -> String {
    match subgroup_id(label) {
        0 => String::new(),
        id => format!("{prefix}{id}"),
    }
}

pub fn is_room_number(room: &str) -> bool {
    ROOM_NUMBER.is_match(room)
}

/// Room text with its leading space: `" КАБ 204"` for numbered rooms,
/// the label verbatim otherwise.
pub fn room_text(room: &str, prefix: &str) -> String {
    if room.is_empty() {
        String::new()
    } else if is_room_number(room) {
        format!(" {prefix} {room}")
    } else {
        format!(" {room}")
    }
}

/// "Surname Name Patronymic" → "Surname N.P."
pub fn teacher_initials(full_name: &str) -> String {
    let mut parts = full_name.split_whitespace();
    let (Some(surname), Some(_)) = (parts.next(), parts.clone().next()) else {
        return full_name.to_string();
    };

    let initials: String = parts
        .filter_map(|part| part.chars().next())
        .flat_map(|ch| ch.to_uppercase().chain(std::iter::once('.')))
        .collect();

    format!("{surname} {initials}")
}

/// Subject line: upper-cased subject, a space, then the sub-group label.
/// Whole-class lessons keep the trailing space.
pub fn subject_line(subject: &str, subgroup: &str) -> String {
    format!("{} {}", subject.trim().to_uppercase(), subgroup)
}

/// Teacher/room line: initials followed by the room text.
pub fn teacher_line(teacher: &str, room: &str, room_prefix: &str) -> String {
    format!("{}{}", teacher_initials(teacher), room_text(room.trim(), room_prefix))
}

/// `yyyyMMdd` → `dd.MM`; anything unparsable passes through unchanged.
pub fn format_date(key: &str) -> String {
    NaiveDate::parse_from_str(key, "%Y%m%d")
        .map(|date| date.format("%d.%m").to_string())
        .unwrap_or_else(|_| key.to_string())
}
