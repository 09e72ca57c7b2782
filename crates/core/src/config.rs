//! Search configuration via `folio.toml`
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock limits. Values are validated eagerly on load.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "folio.toml";

fn default_limit() -> usize {
    20
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_max_length() -> usize {
    150
}

fn default_context_words() -> usize {
    10
}

fn default_window_words() -> usize {
    25
}

/// Snippet window settings
///
/// Persisted in `folio.toml` under the `[snippet]` section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnippetConfig {
    /// Maximum snippet length in characters before the ellipsis (default: 150)
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Words kept before the first match (default: 10)
    #[serde(default = "default_context_words")]
    pub context_words: usize,
    /// Words in the window (default: 25)
    #[serde(default = "default_window_words")]
    pub window_words: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            context_words: default_context_words(),
            window_words: default_window_words(),
        }
    }
}

/// Search configuration loaded from `folio.toml`.
///
/// # Example
///
/// ```toml
/// default_limit = 20
/// suggestion_limit = 5
///
/// [snippet]
/// max_length = 150
/// context_words = 10
/// window_words = 25
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Result limit applied when a query sets none
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Suggestion limit applied when a caller sets none
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Snippet window settings
    #[serde(default)]
    pub snippet: SnippetConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            suggestion_limit: default_suggestion_limit(),
            snippet: SnippetConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Check that every limit is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any limit or window size is zero.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("default_limit", self.default_limit),
            ("suggestion_limit", self.suggestion_limit),
            ("snippet.max_length", self.snippet.max_length),
            ("snippet.window_words", self.snippet.window_words),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(Error::invalid_input(format!(
                    "'{}' in {} must be at least 1",
                    name, CONFIG_FILE_NAME
                )));
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Folio search configuration
#
# Maximum results returned by a query that sets no limit (default: 20)
default_limit = 20

# Maximum completions returned by a suggestion lookup (default: 5)
suggestion_limit = 5

[snippet]
# Characters kept before the "..." marker (default: 150)
max_length = 150
# Words shown before the first matching word (default: 10)
context_words = 10
# Words in the snippet window (default: 25)
window_words = 25
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
