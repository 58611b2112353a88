//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur while decoding or building constraint expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Missing required field '{field}' at {path}")]
    MissingField { field: &'static str, path: String },

    #[error("Constraint name must not be empty at {path}")]
    EmptyName { path: String },

    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Constraint nesting exceeds {max} levels")]
    NestingTooDeep { max: usize },
}

impl ConstraintError {
    pub fn missing_field(field: &'static str, path: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            path: path.into(),
        }
    }

    pub fn empty_name(path: impl Into<String>) -> Self {
        Self::EmptyName { path: path.into() }
    }

    pub fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            found,
        }
    }
}
