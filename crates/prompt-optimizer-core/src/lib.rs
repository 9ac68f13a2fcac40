pub mod category;
pub mod config;
pub mod error;
pub mod hints;
pub mod optimizer;
pub mod render;

pub use category::{
    classify, classify_with_score, keyword_matches, score_all, CategoryId, CategoryProfile,
    ClassificationResult, CATEGORY_CATALOG,
};
pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{OptimizerError, Result};
pub use hints::{extract_hints, HintSet};
pub use optimizer::{
    optimize, validate, OptimizationMetadata, OptimizationResult, MIN_PROMPT_LENGTH,
};
pub use render::{build_document, normalize_prompt, render, system_role, Document, Section};
