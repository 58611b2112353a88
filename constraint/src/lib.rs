//! graphdoc Constraint
//!
//! The argument-constraint extension carried on schema fields.
//!
//! Responsibilities:
//! - Model constraint expressions (`XOR(name, street)`) as an owned tree
//! - Decode them strictly from introspection JSON
//! - Check that every operand names an argument of its field
//! - Produce meaningful violation messages

mod checker;
mod error;
mod expr;
mod violation;

pub use checker::ConstraintChecker;
pub use error::{ConstraintError, ConstraintResult};
pub use expr::{ConstraintExpr, Operand, MAX_DECODE_DEPTH};
pub use violation::{Violation, ViolationSeverity, Violations};
