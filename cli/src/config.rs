//! Explorer configuration.
//!
//! ```toml
//! format = "html"
//! schema = "schema.json"
//!
//! [render]
//! show_deprecated = true
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use graphdoc_render::{ConfigError, RenderConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How pages are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Configuration of the `graphdoc` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExplorerConfig {
    /// Renderer options.
    pub render: RenderConfig,

    /// Output format.
    pub format: OutputFormat,

    /// Introspection JSON to load; the built-in example schema when absent.
    pub schema: Option<PathBuf>,
}

impl ExplorerConfig {
    /// Loads configuration from a TOML file, or the default when the file
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.render.validate()?;
        Ok(config)
    }
}
