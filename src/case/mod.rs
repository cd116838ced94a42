pub mod camel;
pub mod dot;

pub use camel::to_lower_camel;
pub use dot::to_dot_case;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Any run of characters that are neither Unicode letters nor digits
    pub(crate) static ref SEPARATOR_RUN: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
    // Lowercase letter or digit immediately followed by an uppercase letter
    pub(crate) static ref CAMEL_BOUNDARY: Regex =
        Regex::new(r"([\p{Ll}\p{N}])(\p{Lu})").unwrap();
}

/// Split a value into lowercase word tokens.
///
/// Splitting happens on runs of explicit separators only: any character that
/// is neither a Unicode letter nor a digit. A string without separators is a
/// single token. Absent input yields an empty sequence.
pub fn tokenize(input: Option<&str>) -> Vec<String> {
    let s = match input {
        Some(s) => s.trim(),
        None => return Vec::new(),
    };
    if s.is_empty() {
        return Vec::new();
    }

    if !SEPARATOR_RUN.is_match(s) {
        return vec![s.to_lowercase()];
    }

    SEPARATOR_RUN
        .split(s)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.to_lowercase())
        .collect()
}
