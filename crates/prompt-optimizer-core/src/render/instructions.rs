//! Fixed bullet wording used by the renderer

use crate::category::CategoryId;

const CODING: [&str; 4] = [
    "Write clean, well-documented code",
    "Follow best practices and conventions",
    "Include comments explaining key logic",
    "Handle edge cases and errors appropriately",
];

const WRITING: [&str; 4] = [
    "Write in a clear, engaging style",
    "Organize content with proper structure",
    "Use appropriate tone and voice",
    "Ensure grammatical accuracy",
];

const ANALYSIS: [&str; 4] = [
    "Provide thorough, evidence-based analysis",
    "Consider multiple perspectives",
    "Support conclusions with reasoning",
    "Identify key patterns and insights",
];

const EXPLANATION: [&str; 4] = [
    "Explain concepts clearly and systematically",
    "Use analogies where helpful",
    "Define technical terms",
    "Build from simple to complex",
];

const SUMMARY: [&str; 4] = [
    "Capture all key points",
    "Maintain accuracy to source",
    "Use concise language",
    "Organize information logically",
];

const CREATIVE: [&str; 4] = [
    "Think innovatively and originally",
    "Explore diverse possibilities",
    "Be bold and imaginative",
    "Ensure ideas are practical where needed",
];

pub const GENERIC: [&str; 4] = [
    "Be clear, accurate, and comprehensive",
    "Organize information logically",
    "Use appropriate examples",
    "Address the core question directly",
];

pub const FORMAT_REQUESTED: &str = "Follow the requested format exactly";
pub const FORMAT_DEFAULT: [&str; 2] = [
    "Use clear headings and sections",
    "Structure content logically",
];
pub const LENGTH_REQUESTED: &str = "Adhere to specified length requirements";
pub const LENGTH_DEFAULT: &str = "Provide comprehensive yet concise output";

pub const TONE_REQUESTED: &str = "Maintain the specified tone throughout";
pub const TONE_DEFAULT: &str = "Use professional, clear language";
pub const FIXED_CONSTRAINTS: [&str; 2] = [
    "Ensure accuracy and factual correctness",
    "Avoid unnecessary jargon unless appropriate",
];

pub const EXAMPLES_PLACEHOLDER: &str =
    "[If helpful, provide concrete examples to illustrate your response]";

/// Instruction bullets for a category
///
/// Translation and Q&A share the generic list with the fallback category.
pub fn instructions_for(category: CategoryId) -> &'static [&'static str; 4] {
    match category {
        CategoryId::Coding => &CODING,
        CategoryId::Writing => &WRITING,
        CategoryId::Analysis => &ANALYSIS,
        CategoryId::Explanation => &EXPLANATION,
        CategoryId::Summary => &SUMMARY,
        CategoryId::Creative => &CREATIVE,
        CategoryId::Translation | CategoryId::Qa | CategoryId::General => &GENERIC,
    }
}

/// Categories whose output benefits from an examples placeholder
pub fn wants_examples(category: CategoryId) -> bool {
    matches!(
        category,
        CategoryId::Coding | CategoryId::Writing | CategoryId::Explanation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_four_bullets() {
        for id in CategoryId::ALL {
            assert_eq!(instructions_for(id).len(), 4);
        }
        assert_eq!(instructions_for(CategoryId::General), &GENERIC);
    }

    #[test]
    fn test_translation_and_qa_use_generic() {
        assert_eq!(instructions_for(CategoryId::Translation), &GENERIC);
        assert_eq!(instructions_for(CategoryId::Qa), &GENERIC);
        assert_ne!(instructions_for(CategoryId::Summary), &GENERIC);
    }

    #[test]
    fn test_wants_examples() {
        assert!(wants_examples(CategoryId::Coding));
        assert!(wants_examples(CategoryId::Writing));
        assert!(wants_examples(CategoryId::Explanation));
        assert!(!wants_examples(CategoryId::Analysis));
        assert!(!wants_examples(CategoryId::General));
    }
}
