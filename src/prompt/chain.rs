#[derive(Debug, Clone)]
pub struct ChainOptions {
    /// Prefix surviving fragments with "Step 1:", "Step 2:", etc.
    pub number_steps: bool,
    /// Closing instruction appended after the steps.
    pub final_instruction: Option<String>,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            number_steps: true,
            final_instruction: None,
        }
    }
}

/// Chain prompt fragments into a single stepwise prompt.
///
/// Absent and blank fragments are dropped; survivors are trimmed, optionally
/// numbered, and joined with a blank line. The result always ends with exactly
/// one trailing newline.
pub fn chain_prompts(fragments: &[Option<&str>], options: &ChainOptions) -> String {
    let parts: Vec<String> = fragments
        .iter()
        .filter_map(|fragment| fragment.map(str::trim))
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(i, fragment)| {
            if options.number_steps {
                format!("Step {}: {}", i + 1, fragment)
            } else {
                fragment.to_string()
            }
        })
        .collect();

    let mut result = parts.join("\n\n");

    if let Some(instruction) = options.final_instruction.as_deref() {
        let instruction = instruction.trim();
        if !instruction.is_empty() {
            result.push_str("\n\n");
            result.push_str(instruction);
        }
    }

    if !result.ends_with('\n') {
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_steps() {
        let result = chain_prompts(&[Some("a"), Some("b")], &ChainOptions::default());
        assert_eq!(result, "Step 1: a\n\nStep 2: b\n");
    }

    #[test]
    fn test_unnumbered_steps() {
        let options = ChainOptions {
            number_steps: false,
            ..Default::default()
        };
        let result = chain_prompts(&[Some("first"), Some("second")], &options);
        assert_eq!(result, "first\n\nsecond\n");
    }

    #[test]
    fn test_blank_fragments_dropped() {
        let result = chain_prompts(
            &[Some("  a  "), None, Some("   "), Some("b")],
            &ChainOptions::default(),
        );
        // Numbering restarts over survivors, not the raw input positions
        assert_eq!(result, "Step 1: a\n\nStep 2: b\n");
    }

    #[test]
    fn test_final_instruction_appended() {
        let options = ChainOptions {
            final_instruction: Some("Summarize the results.".to_string()),
            ..Default::default()
        };
        let result = chain_prompts(&[Some("gather data")], &options);
        assert_eq!(result, "Step 1: gather data\n\nSummarize the results.\n");
    }

    #[test]
    fn test_blank_final_instruction_ignored() {
        let options = ChainOptions {
            final_instruction: Some("   ".to_string()),
            ..Default::default()
        };
        let result = chain_prompts(&[Some("a")], &options);
        assert_eq!(result, "Step 1: a\n");
    }

    #[test]
    fn test_empty_input_yields_bare_newline() {
        assert_eq!(chain_prompts(&[], &ChainOptions::default()), "\n");
        assert_eq!(chain_prompts(&[None, Some("")], &ChainOptions::default()), "\n");
    }
}
