//! graphdoc Registry
//!
//! Schema lookup for the documentation explorer. Single source of truth for
//! types, fields, arguments, enum values and field constraints.
//! The schema is immutable after construction via SchemaBuilder or
//! introspection import.

mod builder;
mod introspection;
mod schema;
mod types;

pub use builder::{ArgSpec, FieldSpec, RegistryError, RegistryResult, SchemaBuilder, TypeBuilder};
pub use schema::Schema;
pub use types::*;
