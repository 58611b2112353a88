//! CLI errors.

use std::path::PathBuf;

use graphdoc_registry::RegistryError;
use graphdoc_render::{ConfigError, RenderError};
use thiserror::Error;

/// Errors surfaced by the `graphdoc` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema error: {0}")]
    Registry(#[from] RegistryError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid field path '{0}', expected Type.field")]
    InvalidFieldPath(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
