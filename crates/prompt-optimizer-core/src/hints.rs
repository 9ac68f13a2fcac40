//! Structural hint detection
//!
//! Four independent, case-insensitive checks against the raw prompt text:
//! an explicit length ("500 words"), a tone adjective, a format noun, and an
//! example marker. Tone, format and example vocabularies match whole words only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LENGTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+\s*(word|character|sentence|paragraph|page|line)s?\b")
        .expect("length pattern is valid")
});

static TONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(formal|informal|professional|casual|friendly|technical|simple|academic)\b",
    )
    .expect("tone pattern is valid")
});

static FORMAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(list|bullet|markdown|json|table|format|structure)\b")
        .expect("format pattern is valid")
});

static EXAMPLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(example|instance|sample|like)\b").expect("example pattern is valid")
});

/// Structural signals found in a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HintSet {
    pub length_specified: bool,
    pub tone_specified: bool,
    pub format_specified: bool,
    pub example_given: bool,
}

impl HintSet {
    /// Names of the hints that are set, in field order
    pub fn detected(&self) -> Vec<&'static str> {
        [
            (self.length_specified, "length"),
            (self.tone_specified, "tone"),
            (self.format_specified, "format"),
            (self.example_given, "example"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.detected().is_empty()
    }
}

/// Scan the prompt for length, tone, format and example hints
pub fn extract_hints(text: &str) -> HintSet {
    let hints = HintSet {
        length_specified: LENGTH_PATTERN.is_match(text),
        tone_specified: TONE_PATTERN.is_match(text),
        format_specified: FORMAT_PATTERN.is_match(text),
        example_given: EXAMPLE_PATTERN.is_match(text),
    };
    tracing::debug!(detected = ?hints.detected(), "extracted hints");
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_only() {
        let hints = extract_hints("Write a 300 word summary");
        assert_eq!(
            hints,
            HintSet {
                length_specified: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_length_variants() {
        assert!(extract_hints("Use 3 paragraphs").length_specified);
        assert!(extract_hints("about 500words total").length_specified);
        assert!(extract_hints("Keep it to 2 Pages").length_specified);
        assert!(extract_hints("max 140 characters").length_specified);
        assert!(!extract_hints("Write many words").length_specified);
        assert!(!extract_hints("300 wordsmiths").length_specified);
    }

    #[test]
    fn test_tone_whole_word() {
        assert!(extract_hints("Make it FORMAL please").tone_specified);
        assert!(extract_hints("keep it casual").tone_specified);
        assert!(!extract_hints("simplest approach").tone_specified);
    }

    #[test]
    fn test_format_whole_word() {
        assert!(extract_hints("Return JSON").format_specified);
        assert!(extract_hints("as a markdown table").format_specified);
        assert!(!extract_hints("a listing of items").format_specified);
        assert!(!extract_hints("reformat nothing").format_specified);
    }

    #[test]
    fn test_example_whole_word() {
        assert!(extract_hints("For example, a cat").example_given);
        assert!(extract_hints("something like this").example_given);
        assert!(!extract_hints("examples are missing").example_given);
        assert!(!extract_hints("she likes it").example_given);
    }

    #[test]
    fn test_no_hints() {
        let hints = extract_hints("Reverse a string");
        assert!(hints.is_empty());
        assert!(hints.detected().is_empty());
    }

    #[test]
    fn test_all_hints() {
        let hints = extract_hints("A formal 2 page report as a bullet list, like a memo");
        assert_eq!(hints.detected(), vec!["length", "tone", "format", "example"]);
    }
}
