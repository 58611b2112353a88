//! Render configuration.
//!
//! ```toml
//! max_constraint_depth = 16
//! show_deprecated = true
//! no_description_text = "Undocumented"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Options shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RenderConfig {
    /// Deepest constraint nesting that still renders.
    pub max_constraint_depth: usize,

    /// Render the "deprecated fields" and "deprecated values" categories.
    pub show_deprecated: bool,

    /// Render ` = <default>` after arguments and input fields.
    pub show_default_values: bool,

    /// Placeholder for types and fields without a description.
    pub no_description_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_constraint_depth: 32,
            show_deprecated: false,
            show_default_values: true,
            no_description_text: "No Description".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_constraint_depth(mut self, depth: usize) -> Self {
        self.max_constraint_depth = depth;
        self
    }

    pub fn with_show_deprecated(mut self, show: bool) -> Self {
        self.show_deprecated = show;
        self
    }

    pub fn with_show_default_values(mut self, show: bool) -> Self {
        self.show_default_values = show;
        self
    }

    pub fn with_no_description_text(mut self, text: impl Into<String>) -> Self {
        self.no_description_text = text.into();
        self
    }

    /// Reject settings no renderer can honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_constraint_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_constraint_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
