use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NEWLINE_RUN: Regex = Regex::new(r"\n{2,}").unwrap();
    static ref BLANK_RUN: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Header prepended by the `polite` option.
pub const POLITE_HEADER: &str =
    "Please respond succinctly and politely to the following request:";

#[derive(Debug, Clone, Default)]
pub struct RefineOptions {
    /// Keep single newlines instead of flattening the prompt to one line.
    pub preserve_newlines: bool,
    /// Prepend a courteous instruction header.
    pub polite: bool,
}

/// Normalize whitespace in a raw prompt.
///
/// Conservative on purpose: meaning is untouched, only spacing is made
/// consistent. The result ends with exactly one trailing newline, except for
/// absent or blank input which yields an empty string.
pub fn refine_prompt(prompt: Option<&str>, options: &RefineOptions) -> String {
    let p = match prompt {
        Some(p) => p.trim(),
        None => return String::new(),
    };
    if p.is_empty() {
        return String::new();
    }

    let mut body = if options.preserve_newlines {
        let collapsed = NEWLINE_RUN.replace_all(p, "\n");
        collapsed
            .split('\n')
            .map(|line| BLANK_RUN.replace_all(line, " ").trim().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        WHITESPACE_RUN.replace_all(p, " ").into_owned()
    };

    if options.polite {
        body = format!("{}\n\n{}", POLITE_HEADER, body);
    }

    format!("{}\n", body.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_whitespace_by_default() {
        let result = refine_prompt(Some("  hello \t world\n\nnext  "), &RefineOptions::default());
        assert_eq!(result, "hello world next\n");
    }

    #[test]
    fn test_preserve_newlines() {
        let options = RefineOptions {
            preserve_newlines: true,
            ..Default::default()
        };
        let result = refine_prompt(Some("line one  here\n\n\n  line two"), &options);
        assert_eq!(result, "line one here\nline two\n");
    }

    #[test]
    fn test_polite_header() {
        let options = RefineOptions {
            polite: true,
            ..Default::default()
        };
        let result = refine_prompt(Some("do the thing"), &options);
        assert_eq!(result, format!("{}\n\ndo the thing\n", POLITE_HEADER));
    }

    #[test]
    fn test_absent_and_blank() {
        assert_eq!(refine_prompt(None, &RefineOptions::default()), "");
        assert_eq!(refine_prompt(Some(""), &RefineOptions::default()), "");
        assert_eq!(refine_prompt(Some(" \n\t "), &RefineOptions::default()), "");
    }

    #[test]
    fn test_single_trailing_newline() {
        let result = refine_prompt(Some("already clean"), &RefineOptions::default());
        assert_eq!(result, "already clean\n");
        assert!(!result.ends_with("\n\n"));
    }
}
