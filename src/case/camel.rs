use crate::case::SEPARATOR_RUN;

/// Convert a value to lowerCamelCase.
///
/// Separator-delimited fragments are lowercased and joined with each fragment
/// after the first capitalized. A string without any separator keeps its
/// interior casing and only has its first character forced to lowercase, so
/// `HelloWorld` becomes `helloWorld` rather than `helloworld`.
pub fn to_lower_camel(input: Option<&str>) -> String {
    let s = match input {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    if s.is_empty() {
        return String::new();
    }

    if SEPARATOR_RUN.is_match(s) {
        let mut out = String::with_capacity(s.len());
        for (i, fragment) in SEPARATOR_RUN
            .split(s)
            .filter(|fragment| !fragment.is_empty())
            .enumerate()
        {
            let fragment = fragment.to_lowercase();
            if i == 0 {
                out.push_str(&fragment);
            } else {
                out.push_str(&capitalize(&fragment));
            }
        }
        return out;
    }

    // No separators: preserve interior casing, force the first char lowercase
    lower_first(s)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
