//! # Category Module
//!
//! 自由記述のプロンプトを固定のタスクカテゴリに分類する機能を提供する。
//!
//! ## カテゴリ
//!
//! - **coding**: コード、関数、アルゴリズム、デバッグ
//! - **writing**: 記事、ブログ、エッセイ、下書き
//! - **analysis**: 分析、評価、比較、調査
//! - **explanation**: 説明、定義、解説
//! - **summary**: 要約、概要、要点
//! - **translation**: 翻訳、言語変換
//! - **creative**: 生成、デザイン、ブレインストーミング
//! - **qa**: 質問応答
//! - **general**: どのキーワードにも一致しない場合のフォールバック
//!
//! ## モジュール構成
//!
//! - `catalog`: カテゴリの静的定義
//! - `classifier`: キーワードによる分類器
//!
//! ## 使用例
//!
//! ```rust
//! use prompt_optimizer_core::category::{classify, classify_with_score, CategoryId};
//!
//! assert_eq!(classify("Explain how photosynthesis works"), CategoryId::Explanation);
//!
//! let result = classify_with_score("Good morning");
//! assert_eq!(result.category, CategoryId::General);
//! assert_eq!(result.score, 0);
//! ```

mod catalog;
mod classifier;

// Re-exports
pub use catalog::{CategoryId, CategoryProfile, CATEGORY_CATALOG};
pub use classifier::{
    classify, classify_with_score, keyword_matches, score_all, ClassificationResult,
};
