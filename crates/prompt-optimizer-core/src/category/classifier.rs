//! Task Classifier
//!
//! プロンプトをカタログのキーワードでスコアリングし、単一のカテゴリを選ぶ。
//!
//! キーワードは部分文字列として照合する（"class" は "classical" にも一致する）。
//! 単語境界での照合に変えると分類結果が変わるため、この挙動は維持する。

use serde::{Deserialize, Serialize};

use super::catalog::{CategoryId, CategoryProfile};

/// 分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: CategoryId,
    /// 一致したキーワード数（`General` の場合は0）
    pub score: usize,
}

/// プロンプトを分類してカテゴリのみを返す
pub fn classify(text: &str) -> CategoryId {
    classify_with_score(text).category
}

/// プロンプトを分類してスコア付きで返す
///
/// - カタログ順に走査し、厳密に大きいスコアのみで更新（同点は先勝ち）
/// - 最大スコアが0なら `General`
pub fn classify_with_score(text: &str) -> ClassificationResult {
    let lower = text.to_lowercase();

    let mut best = ClassificationResult {
        category: CategoryId::General,
        score: 0,
    };

    for id in CategoryId::ALL {
        let score = id.profile().map(|p| score_lowercase(&lower, p)).unwrap_or(0);
        if score > best.score {
            best = ClassificationResult {
                category: id,
                score,
            };
        }
    }

    tracing::debug!(category = %best.category, score = best.score, "classified prompt");
    best
}

/// 全カテゴリのスコア（カタログ順）
pub fn score_all(text: &str) -> Vec<(CategoryId, usize)> {
    let lower = text.to_lowercase();
    CategoryId::ALL
        .into_iter()
        .map(|id| {
            let score = id.profile().map(|p| score_lowercase(&lower, p)).unwrap_or(0);
            (id, score)
        })
        .collect()
}

/// 指定カテゴリで一致したキーワード
pub fn keyword_matches(text: &str, category: CategoryId) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    category
        .profile()
        .map(|p| {
            p.keywords
                .iter()
                .copied()
                .filter(|kw| lower.contains(kw))
                .collect()
        })
        .unwrap_or_default()
}

fn score_lowercase(lower: &str, profile: &CategoryProfile) -> usize {
    profile
        .keywords
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count()
}
