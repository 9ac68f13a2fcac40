//! Document Renderer
//!
//! Wraps a prompt in a structured instruction document:
//!
//! ```text
//! # System Role
//! # Task
//! # Instructions
//! # Output Format
//! # Constraints
//! # Examples (Optional)   <- coding / writing / explanation without an example hint
//! ```
//!
//! ```rust
//! use prompt_optimizer_core::render::{normalize_prompt, render};
//! use prompt_optimizer_core::{CategoryId, HintSet};
//!
//! assert_eq!(normalize_prompt("  hello   world  "), "Hello world.");
//!
//! let doc = render("list three colors", CategoryId::General, &HintSet::default());
//! assert!(doc.starts_with("# System Role\nYou are a helpful"));
//! ```

mod document;
pub mod instructions;

pub use document::{Document, Section, SectionLine};

use crate::category::CategoryId;
use crate::hints::HintSet;

use instructions::{
    instructions_for, wants_examples, EXAMPLES_PLACEHOLDER, FIXED_CONSTRAINTS, FORMAT_DEFAULT,
    FORMAT_REQUESTED, LENGTH_DEFAULT, LENGTH_REQUESTED, TONE_DEFAULT, TONE_REQUESTED,
};

pub const SYSTEM_ROLE_TITLE: &str = "System Role";
pub const TASK_TITLE: &str = "Task";
pub const INSTRUCTIONS_TITLE: &str = "Instructions";
pub const OUTPUT_FORMAT_TITLE: &str = "Output Format";
pub const CONSTRAINTS_TITLE: &str = "Constraints";
pub const EXAMPLES_TITLE: &str = "Examples (Optional)";

const GENERAL_ROLE: &str = "You are a helpful, knowledgeable, and precise AI assistant.";

/// Collapse whitespace, capitalize, and terminate with punctuation
pub fn normalize_prompt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = collapsed.chars();
    let mut normalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    if !normalized.ends_with(&['.', '!', '?'][..]) {
        normalized.push('.');
    }
    normalized
}

/// Role sentence for the System Role section
pub fn system_role(category: CategoryId) -> String {
    match category.profile() {
        Some(profile) => format!(
            "You are a {} with deep expertise in {}.",
            profile.role, profile.domain
        ),
        None => GENERAL_ROLE.to_string(),
    }
}

/// Assemble the sections for a prompt without formatting them
pub fn build_document(text: &str, category: CategoryId, hints: &HintSet) -> Document {
    let mut doc = Document::new();

    doc.push(Section::new(SYSTEM_ROLE_TITLE).text(system_role(category)));
    doc.push(Section::new(TASK_TITLE).text(normalize_prompt(text)));
    doc.push(Section::new(INSTRUCTIONS_TITLE).bullets(instructions_for(category).iter().copied()));

    let output_format = if hints.format_specified {
        Section::new(OUTPUT_FORMAT_TITLE).bullet(FORMAT_REQUESTED)
    } else {
        Section::new(OUTPUT_FORMAT_TITLE).bullets(FORMAT_DEFAULT)
    };
    let output_format = output_format.bullet(if hints.length_specified {
        LENGTH_REQUESTED
    } else {
        LENGTH_DEFAULT
    });
    doc.push(output_format);

    doc.push(
        Section::new(CONSTRAINTS_TITLE)
            .bullet(if hints.tone_specified {
                TONE_REQUESTED
            } else {
                TONE_DEFAULT
            })
            .bullets(FIXED_CONSTRAINTS),
    );

    if wants_examples(category) && !hints.example_given {
        doc.push(Section::new(EXAMPLES_TITLE).text(EXAMPLES_PLACEHOLDER));
    }

    tracing::debug!(
        category = %category,
        sections = doc.sections().len(),
        "built document"
    );
    doc
}

/// Render the structured document as plain text
pub fn render(text: &str, category: CategoryId, hints: &HintSet) -> String {
    build_document(text, category, hints).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_prompt("  hello   world  "), "Hello world.");
        assert_eq!(normalize_prompt("a\n\tb"), "A b.");
    }

    #[test]
    fn test_normalize_keeps_terminal_punctuation() {
        assert_eq!(normalize_prompt("why is it blue?"), "Why is it blue?");
        assert_eq!(normalize_prompt("do it now!"), "Do it now!");
        assert_eq!(normalize_prompt("Done."), "Done.");
        assert_eq!(normalize_prompt("done?  "), "Done?");
    }

    #[test]
    fn test_normalize_non_ascii_first_char() {
        assert_eq!(normalize_prompt("éclair recipe"), "Éclair recipe.");
        assert_eq!(normalize_prompt("42 things"), "42 things.");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_prompt("  some   text here ");
        assert_eq!(normalize_prompt(&once), once);
    }

    #[test]
    fn test_system_role() {
        assert_eq!(
            system_role(CategoryId::General),
            "You are a helpful, knowledgeable, and precise AI assistant."
        );
        assert_eq!(
            system_role(CategoryId::Coding),
            "You are a expert software developer and programmer with deep expertise in software development."
        );
    }

    #[test]
    fn test_full_coding_document() {
        let doc = render(
            "write a function to reverse a string",
            CategoryId::Coding,
            &HintSet::default(),
        );
        let expected = "\
# System Role
You are a expert software developer and programmer with deep expertise in software development.

# Task
Write a function to reverse a string.

# Instructions
- Write clean, well-documented code
- Follow best practices and conventions
- Include comments explaining key logic
- Handle edge cases and errors appropriately

# Output Format
- Use clear headings and sections
- Structure content logically
- Provide comprehensive yet concise output

# Constraints
- Use professional, clear language
- Ensure accuracy and factual correctness
- Avoid unnecessary jargon unless appropriate

# Examples (Optional)
[If helpful, provide concrete examples to illustrate your response]
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_hints_switch_bullets() {
        let hints = HintSet {
            length_specified: true,
            tone_specified: true,
            format_specified: true,
            example_given: false,
        };
        let doc = build_document("summarize the report", CategoryId::Summary, &hints);

        let format = doc.section(OUTPUT_FORMAT_TITLE).unwrap();
        assert_eq!(
            format.bullet_texts(),
            vec![FORMAT_REQUESTED, LENGTH_REQUESTED]
        );

        let constraints = doc.section(CONSTRAINTS_TITLE).unwrap();
        assert_eq!(constraints.bullet_texts()[0], TONE_REQUESTED);
        assert_eq!(constraints.bullet_texts().len(), 3);
    }

    #[test]
    fn test_examples_section_rules() {
        let none = HintSet::default();
        let with_example = HintSet {
            example_given: true,
            ..Default::default()
        };

        for id in [
            CategoryId::Coding,
            CategoryId::Writing,
            CategoryId::Explanation,
        ] {
            assert!(build_document("x", id, &none).section(EXAMPLES_TITLE).is_some());
            assert!(build_document("x", id, &with_example)
                .section(EXAMPLES_TITLE)
                .is_none());
        }

        for id in [
            CategoryId::Analysis,
            CategoryId::Summary,
            CategoryId::Translation,
            CategoryId::Creative,
            CategoryId::Qa,
            CategoryId::General,
        ] {
            assert!(build_document("x", id, &none).section(EXAMPLES_TITLE).is_none());
        }
    }

    #[test]
    fn test_section_order() {
        let doc = build_document("explain gravity", CategoryId::Explanation, &HintSet::default());
        assert_eq!(
            doc.titles(),
            vec![
                SYSTEM_ROLE_TITLE,
                TASK_TITLE,
                INSTRUCTIONS_TITLE,
                OUTPUT_FORMAT_TITLE,
                CONSTRAINTS_TITLE,
                EXAMPLES_TITLE,
            ]
        );
    }

    #[test]
    fn test_general_document_ends_with_constraints() {
        let doc = render("tell me something", CategoryId::General, &HintSet::default());
        assert!(doc.ends_with("- Avoid unnecessary jargon unless appropriate\n"));
        assert!(doc.contains("- Address the core question directly\n"));
    }
}
