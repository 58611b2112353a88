//! Constraint violation types.

use std::fmt;

/// Severity of a constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationSeverity {
    /// The constraint cannot be satisfied as declared.
    Error,
    /// Suspicious but renderable.
    Warning,
}

/// A problem found in a field's declared constraints.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the check that failed (e.g. `unknown_argument`).
    pub constraint_name: String,
    /// The severity of the violation.
    pub severity: ViolationSeverity,
    /// Human-readable message describing the violation.
    pub message: String,
    /// Field coordinate (`Type.field`) the violation belongs to.
    pub field: Option<String>,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        constraint_name: impl Into<String>,
        severity: ViolationSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            severity,
            message: message.into(),
            field: None,
        }
    }

    /// Create an error-level violation.
    pub fn error(constraint_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(constraint_name, ViolationSeverity::Error, message)
    }

    /// Create a warning-level violation.
    pub fn warning(constraint_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(constraint_name, ViolationSeverity::Warning, message)
    }

    /// Attach the field coordinate.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Check if this is an error-level violation.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, ViolationSeverity::Error)
    }

    /// Check if this is a warning-level violation.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, ViolationSeverity::Warning)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            ViolationSeverity::Error => "error",
            ViolationSeverity::Warning => "warning",
        };
        match &self.field {
            Some(field) => write!(
                f,
                "{}[{}] {}: {}",
                level, self.constraint_name, field, self.message
            ),
            None => write!(f, "{}[{}] {}", level, self.constraint_name, self.message),
        }
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Check if there are any error-level violations.
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.is_error())
    }

    /// Check if there are only warnings.
    pub fn has_only_warnings(&self) -> bool {
        !self.violations.is_empty() && !self.has_errors()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Get error-level violations.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    /// Get warning-level violations.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_warning())
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
