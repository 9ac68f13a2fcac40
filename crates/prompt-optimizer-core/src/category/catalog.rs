//! Category Catalog
//!
//! コード内で定義される固定のタスクカテゴリ。
//! キーワード、ロール、ドメインの静的テーブル。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptimizerError, Result};

/// タスクカテゴリ識別子
///
/// `General` はカタログに存在しないフォールバック。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Coding,
    Writing,
    Analysis,
    Explanation,
    Summary,
    Translation,
    Creative,
    Qa,
    #[default]
    General,
}

impl CategoryId {
    /// カタログ順のカテゴリ（`General` を除く）
    pub const ALL: [CategoryId; 8] = [
        Self::Coding,
        Self::Writing,
        Self::Analysis,
        Self::Explanation,
        Self::Summary,
        Self::Translation,
        Self::Creative,
        Self::Qa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Writing => "writing",
            Self::Analysis => "analysis",
            Self::Explanation => "explanation",
            Self::Summary => "summary",
            Self::Translation => "translation",
            Self::Creative => "creative",
            Self::Qa => "qa",
            Self::General => "general",
        }
    }

    /// カタログ定義を取得（`General` は `None`）
    pub fn profile(&self) -> Option<&'static CategoryProfile> {
        CATEGORY_CATALOG.iter().find(|p| p.id == *self)
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Self::General)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        if name == "general" {
            return Ok(Self::General);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| OptimizerError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// カテゴリの静的定義
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub id: CategoryId,
    /// 小文字のキーワード（部分文字列として照合）
    pub keywords: &'static [&'static str],
    /// ロール文に埋め込む役割
    pub role: &'static str,
    /// ロール文に埋め込む専門領域
    pub domain: &'static str,
}

/// カテゴリカタログ（順序は同点時の優先順位）
pub const CATEGORY_CATALOG: &[CategoryProfile] = &[
    CategoryProfile {
        id: CategoryId::Coding,
        keywords: &[
            "code",
            "function",
            "program",
            "script",
            "algorithm",
            "debug",
            "implement",
            "develop",
            "api",
            "class",
            "variable",
            "syntax",
        ],
        role: "expert software developer and programmer",
        domain: "software development",
    },
    CategoryProfile {
        id: CategoryId::Writing,
        keywords: &[
            "write",
            "article",
            "blog",
            "essay",
            "content",
            "paragraph",
            "story",
            "post",
            "copy",
            "draft",
        ],
        role: "professional content writer and editor",
        domain: "content creation",
    },
    CategoryProfile {
        id: CategoryId::Analysis,
        keywords: &[
            "analyze",
            "analyse",
            "examine",
            "evaluate",
            "assess",
            "review",
            "compare",
            "investigate",
        ],
        role: "analytical expert and researcher",
        domain: "data analysis and research",
    },
    CategoryProfile {
        id: CategoryId::Explanation,
        keywords: &[
            "explain",
            "describe",
            "how does",
            "what is",
            "why",
            "define",
            "clarify",
            "elaborate",
        ],
        role: "knowledgeable educator and expert communicator",
        domain: "education and explanation",
    },
    CategoryProfile {
        id: CategoryId::Summary,
        keywords: &[
            "summarize",
            "summarise",
            "tldr",
            "brief",
            "overview",
            "synopsis",
            "condense",
            "key points",
        ],
        role: "expert summarization specialist",
        domain: "information synthesis",
    },
    CategoryProfile {
        id: CategoryId::Translation,
        keywords: &["translate", "translation", "language", "convert to"],
        role: "professional translator and linguist",
        domain: "language translation",
    },
    CategoryProfile {
        id: CategoryId::Creative,
        keywords: &[
            "create",
            "generate",
            "design",
            "imagine",
            "brainstorm",
            "invent",
            "ideate",
            "creative",
        ],
        role: "creative professional and innovative thinker",
        domain: "creative generation",
    },
    CategoryProfile {
        id: CategoryId::Qa,
        keywords: &[
            "answer", "question", "what", "who", "where", "when", "which", "respond",
        ],
        role: "knowledgeable assistant and problem solver",
        domain: "question answering",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_enum_order() {
        let ids: Vec<_> = CATEGORY_CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids, CategoryId::ALL.to_vec());
    }

    #[test]
    fn test_general_has_no_profile() {
        assert!(CategoryId::General.profile().is_none());
        for id in CategoryId::ALL {
            assert!(id.profile().is_some(), "missing profile for {}", id);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for profile in CATEGORY_CATALOG {
            for kw in profile.keywords {
                assert_eq!(*kw, kw.to_lowercase().as_str());
            }
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("coding".parse::<CategoryId>().unwrap(), CategoryId::Coding);
        assert_eq!(" QA ".parse::<CategoryId>().unwrap(), CategoryId::Qa);
        assert_eq!(
            "general".parse::<CategoryId>().unwrap(),
            CategoryId::General
        );
        assert!("poetry".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&CategoryId::Explanation).unwrap();
        assert_eq!(json, "\"explanation\"");
        let back: CategoryId = serde_json::from_str("\"qa\"").unwrap();
        assert_eq!(back, CategoryId::Qa);
    }
}
