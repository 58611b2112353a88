//! Constraint checking.

use std::collections::HashSet;

use crate::expr::ConstraintExpr;
use crate::violation::{Violation, Violations};

/// Checks a field's constraints against the field's declared arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintChecker;

impl ConstraintChecker {
    /// Create a new constraint checker.
    pub fn new() -> Self {
        Self
    }

    /// Check the constraints of one field.
    ///
    /// `coordinate` is the `Type.field` label attached to each violation.
    pub fn check_field(
        &self,
        coordinate: &str,
        arg_names: &[&str],
        constraints: &[ConstraintExpr],
    ) -> Violations {
        let mut violations = Violations::new();
        let mut seen = HashSet::new();

        for constraint in constraints {
            for name in constraint.field_refs() {
                if !arg_names.contains(&name) {
                    violations.push(
                        Violation::error(
                            "unknown_argument",
                            format!("{} references unknown argument '{}'", constraint, name),
                        )
                        .with_field(coordinate),
                    );
                }
            }

            // Rendered items are keyed by relation name
            if !seen.insert(constraint.name.as_str()) {
                violations.push(
                    Violation::warning(
                        "duplicate_constraint",
                        format!("relation '{}' is declared more than once", constraint.name),
                    )
                    .with_field(coordinate),
                );
            }
        }

        violations
    }
}
