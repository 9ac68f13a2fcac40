use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptimizerError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# prompt-optimizer configuration file
# Location: ~/.prompt-optimizer/config.toml

[output]
# How `optimize` prints its result: "text" or "json"
# Default: "text"
format = "text"

# Print the length/hint summary after a text document
# Default: true
show_metadata = true

# Colored status messages
# Default: true
color = true
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub show_metadata: bool,

    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_metadata: true,
            color: true,
        }
    }
}

/// Rendering of an optimization result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(OptimizerError::InvalidConfigValue {
                key: "output.format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| OptimizerError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.format" => Some(self.output.format.to_string()),
            "output.show_metadata" => Some(self.output.show_metadata.to_string()),
            "output.color" => Some(self.output.color.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output.format" => {
                self.output.format = value.parse()?;
                Ok(())
            }
            "output.show_metadata" => {
                self.output.show_metadata = parse_bool(key, value)?;
                Ok(())
            }
            "output.color" => {
                self.output.color = parse_bool(key, value)?;
                Ok(())
            }
            _ => Err(OptimizerError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["output.format", "output.show_metadata", "output.color"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

/// Accepts true/false, yes/no, on/off, 1/0
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(OptimizerError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
