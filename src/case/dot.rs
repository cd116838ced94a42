use crate::case::{CAMEL_BOUNDARY, SEPARATOR_RUN};
use std::fmt::Display;

/// Convert a value to dot.case (lowercase words separated by dots).
///
/// Unlike [`to_lower_camel`](crate::case::to_lower_camel), this formatter
/// always splits at camelCase boundaries in addition to explicit separators,
/// and it accepts any displayable value rather than only text. Absent input
/// yields an empty string.
///
/// The result is idempotent: converting it again is a no-op.
pub fn to_dot_case<V: Display>(input: Option<V>) -> String {
    let value = match input {
        Some(v) => v.to_string(),
        None => return String::new(),
    };
    let s = value.trim();
    if s.is_empty() {
        return String::new();
    }

    // Make implicit camel boundaries explicit: aB -> "a B"
    let spaced = CAMEL_BOUNDARY.replace_all(s, "$1 $2");

    SEPARATOR_RUN
        .split(&spaced)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}
