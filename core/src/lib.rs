//! graphdoc Core Types
//!
//! This crate provides the foundational types used throughout graphdoc:
//! - Type references (TypeRef) with GraphQL wrapping (list, non-null)
//! - Type kinds (TypeKind) as reported by introspection
//! - Input values (the Value enum) used for argument defaults
//! - Common error types

mod error;
mod type_ref;
mod value;

pub use error::*;
pub use type_ref::*;
pub use value::*;
