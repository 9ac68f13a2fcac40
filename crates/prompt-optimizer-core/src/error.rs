use std::path::PathBuf;
use thiserror::Error;

use crate::optimizer::MIN_PROMPT_LENGTH;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Please enter a prompt to optimize")]
    EmptyInput,

    #[error("Prompt is too short. Please provide more details.")]
    TooShort { length: usize },

    #[error("Unknown category: '{name}'")]
    UnknownCategory { name: String },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;

impl OptimizerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyInput => 2,
            Self::TooShort { .. } => 3,
            Self::UnknownCategory { .. } => 4,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 5,
            _ => 1,
        }
    }

    /// Input was rejected before any processing happened
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::TooShort { .. })
    }

    /// Extra detail for validation failures, shown under the main message
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::TooShort { length } => Some(format!(
                "got {} character{}, need at least {}",
                length,
                if *length == 1 { "" } else { "s" },
                MIN_PROMPT_LENGTH
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_differ() {
        let empty = OptimizerError::EmptyInput.to_string();
        let short = OptimizerError::TooShort { length: 2 }.to_string();
        assert_ne!(empty, short);
        assert_eq!(empty, "Please enter a prompt to optimize");
        assert!(short.contains("too short"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(OptimizerError::EmptyInput.exit_code(), 2);
        assert_eq!(OptimizerError::TooShort { length: 1 }.exit_code(), 3);
        assert_eq!(
            OptimizerError::ConfigKeyNotFound {
                key: "x".to_string()
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn test_hint_singular() {
        let hint = OptimizerError::TooShort { length: 1 }.hint().unwrap();
        assert_eq!(hint, "got 1 character, need at least 5");
        assert!(OptimizerError::EmptyInput.hint().is_none());
    }
}
