//! Scenario errors.

use graphdoc_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("[{scenario}] {page}: {message}")]
    AssertionFailed {
        scenario: String,
        page: String,
        message: String,
    },

    #[error("[{scenario}] no such page: {page}")]
    UnknownPage { scenario: String, page: String },

    #[error("schema failed to build: {0}")]
    Schema(#[from] RegistryError),
}

impl ScenarioError {
    pub fn assertion_failed(
        scenario: impl Into<String>,
        page: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            page: page.into(),
            message: message.into(),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
