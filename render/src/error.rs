//! Render errors.

use thiserror::Error;

/// Errors that can occur while rendering documentation.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("constraint nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("failed to serialize fragments: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
