//! Table configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::gallows::Gallows;
use crate::words::{WordEntry, WordList};

/// Settings shared by every table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct TableConfig {
    /// Fail budget. Defaults to the number of gallows stages.
    #[serde(default)]
    max_fails: Option<usize>,

    /// How long a redraw may take before it counts as failed.
    #[serde(default = "default_render_timeout_ms")]
    render_timeout_ms: u64,

    /// Seed for hint selection and word picking.
    #[serde(default)]
    hint_seed: Option<u64>,

    /// Replaces the built-in word list.
    #[serde(default)]
    words: Option<Vec<WordEntry>>,
}

#[instrument]
fn default_render_timeout_ms() -> u64 {
    5000
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_fails: None,
            render_timeout_ms: default_render_timeout_ms(),
            hint_seed: None,
            words: None,
        }
    }
}

impl TableConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            max_fails = config.effective_max_fails(),
            render_timeout_ms = config.render_timeout_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_fails == Some(0) {
            return Err(ConfigError::new("max_fails must be at least 1".to_string()));
        }
        if config.render_timeout_ms == 0 {
            return Err(ConfigError::new(
                "render_timeout_ms must be at least 1".to_string(),
            ));
        }
        if config.words.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::new("words must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Fail budget to start sessions with.
    pub fn effective_max_fails(&self) -> usize {
        self.max_fails.unwrap_or(Gallows::default_max_fails())
    }

    /// Redraw timeout as a duration.
    pub fn render_timeout(&self) -> Duration {
        Duration::from_millis(self.render_timeout_ms)
    }

    /// Configured words, or the built-in list.
    pub fn word_list(&self) -> WordList {
        match &self.words {
            Some(words) => WordList::new(words.clone()),
            None => WordList::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
