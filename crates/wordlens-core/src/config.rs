use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::OutputFormat;

/// Errors raised while loading `.wordlens.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{path}'. Run `wordlens init` to create a valid config file")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid vowel entry '{entry}': expected a single ASCII letter")]
    InvalidVowel { entry: String },
}

/// Top-level configuration from `.wordlens.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub letters: LettersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The vowel set used for classification. Consonants are the remaining
/// ASCII letters, so only the vowels are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LettersConfig {
    #[serde(default = "default_vowels")]
    pub vowels: Vec<String>,
}

fn default_vowels() -> Vec<String> {
    crate::classify::DEFAULT_VOWELS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for LettersConfig {
    fn default() -> Self {
        Self {
            vowels: default_vowels(),
        }
    }
}

/// Report output preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
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
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a `.wordlens.toml` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `.wordlens.toml` in the given directory or any ancestor,
    /// or return defaults.
    pub fn load_or_default(dir: &Path) -> Self {
        // Walk up from dir to find .wordlens.toml (similar to how git finds .git)
        let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut current = start.as_path();
        loop {
            let config_path = current.join(".wordlens.toml");
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!(
                            "Warning: failed to load config from '{}': {e}. Using defaults.",
                            config_path.display()
                        );
                        Self::default()
                    }
                };
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Self::default()
    }

    /// Reject vowel entries that are not a single ASCII letter.
    fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.letters.vowels {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {}
                _ => {
                    return Err(ConfigError::InvalidVowel {
                        entry: entry.clone(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Generate default TOML content for `wordlens init`.
    pub fn default_toml() -> String {
        r#"# Wordlens - Word Analysis Configuration

[letters]
# The vowel set, one ASCII letter per entry, case-insensitive.
# Every remaining ASCII letter counts as a consonant; anything else
# (digits, punctuation, accented letters) is skipped.
vowels = ["a", "e", "i", "o", "u", "y"]

[output]
# Default report format: "text", "json", or "markdown"
format = "text"
# Colorize terminal output
color = true
"#
        .to_string()
    }
}
