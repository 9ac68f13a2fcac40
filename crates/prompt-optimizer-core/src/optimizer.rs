//! Pipeline facade
//!
//! Validates the raw prompt, then runs classification, hint extraction and
//! rendering. Every call is independent; the only shared data is immutable.
//!
//! ```rust
//! use prompt_optimizer_core::{optimize, CategoryId, OptimizerError};
//!
//! let result = optimize("Write a function to reverse a string").unwrap();
//! assert_eq!(result.category, CategoryId::Coding);
//! assert!(result.optimized.contains("# Examples (Optional)"));
//!
//! assert!(matches!(optimize("hi"), Err(OptimizerError::TooShort { .. })));
//! assert!(matches!(optimize("   "), Err(OptimizerError::EmptyInput)));
//! ```

use serde::{Deserialize, Serialize};

use crate::category::{classify_with_score, CategoryId};
use crate::error::{OptimizerError, Result};
use crate::hints::{extract_hints, HintSet};
use crate::render::render;

/// Minimum number of characters in a trimmed prompt
pub const MIN_PROMPT_LENGTH: usize = 5;

/// Lengths and hints reported alongside the rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationMetadata {
    /// Characters in the raw, untrimmed input
    pub original_length: usize,
    /// Characters in the rendered document
    pub optimized_length: usize,
    pub hints: HintSet,
}

/// Result of a successful optimization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized: String,
    pub category: CategoryId,
    pub metadata: OptimizationMetadata,
}

impl OptimizationResult {
    /// Ratio of rendered length to input length
    pub fn expansion_ratio(&self) -> f64 {
        if self.metadata.original_length == 0 {
            return 0.0;
        }
        self.metadata.optimized_length as f64 / self.metadata.original_length as f64
    }
}

/// Check that a prompt is long enough to process
///
/// Returns the trimmed prompt on success.
pub fn validate(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(OptimizerError::EmptyInput);
    }
    if length < MIN_PROMPT_LENGTH {
        return Err(OptimizerError::TooShort { length });
    }
    Ok(trimmed)
}

/// Turn a raw prompt into a structured instruction document
pub fn optimize(raw: &str) -> Result<OptimizationResult> {
    validate(raw)?;

    let classification = classify_with_score(raw);
    let hints = extract_hints(raw);
    let optimized = render(raw, classification.category, &hints);

    let metadata = OptimizationMetadata {
        original_length: raw.chars().count(),
        optimized_length: optimized.chars().count(),
        hints,
    };

    tracing::info!(
        category = %classification.category,
        score = classification.score,
        original_length = metadata.original_length,
        optimized_length = metadata.optimized_length,
        "optimized prompt"
    );

    Ok(OptimizationResult {
        optimized,
        category: classification.category,
        metadata,
    })
}
