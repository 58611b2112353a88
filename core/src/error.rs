//! Common error types for graphdoc.

use thiserror::Error;

/// Errors that can occur while reading type syntax or type kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Type reference syntax could not be parsed.
    #[error("Malformed type reference '{input}': {reason}")]
    MalformedTypeRef { input: String, reason: String },

    /// Unknown `__TypeKind` value.
    #[error("Unknown type kind: {0}")]
    UnknownKind(String),
}

impl TypeError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTypeRef {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
