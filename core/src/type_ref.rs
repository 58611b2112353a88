//! Type references and type kinds.
//!
//! A type reference is how a field or argument points at a named type,
//! possibly wrapped in list and non-null modifiers. It prints in GraphQL
//! syntax (`[String!]!`) and can be parsed back from it.

use crate::{TypeError, TypeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a named type, as reported by `__Type.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// The introspection spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
        }
    }

    /// Parse an introspection kind name.
    pub fn parse(s: &str) -> TypeResult<Self> {
        match s {
            "SCALAR" => Ok(TypeKind::Scalar),
            "OBJECT" => Ok(TypeKind::Object),
            "INTERFACE" => Ok(TypeKind::Interface),
            "UNION" => Ok(TypeKind::Union),
            "ENUM" => Ok(TypeKind::Enum),
            "INPUT_OBJECT" => Ok(TypeKind::InputObject),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }

    /// Returns true for kinds that declare output fields.
    pub fn has_fields(&self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a type from a field or argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type (`String`, `Business`).
    Named(String),
    /// A list of the inner type (`[T]`).
    List(Box<TypeRef>),
    /// A non-null wrapper (`T!`).
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// The innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    /// Returns true if the outermost wrapper is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Parse GraphQL type syntax, e.g. `[String!]!`.
    pub fn parse(input: &str) -> TypeResult<Self> {
        parse_inner(input.trim(), input)
    }
}

fn parse_inner(s: &str, input: &str) -> TypeResult<TypeRef> {
    if let Some(rest) = s.strip_suffix('!') {
        let inner = parse_inner(rest, input)?;
        if inner.is_non_null() {
            return Err(TypeError::malformed(input, "repeated non-null modifier"));
        }
        return Ok(TypeRef::non_null(inner));
    }

    if let Some(rest) = s.strip_prefix('[') {
        let Some(middle) = rest.strip_suffix(']') else {
            return Err(TypeError::malformed(input, "unclosed list bracket"));
        };
        return Ok(TypeRef::list(parse_inner(middle, input)?));
    }

    let mut chars = s.chars();
    match chars.next() {
        None => Err(TypeError::malformed(input, "missing type name")),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            Err(TypeError::malformed(input, format!("unexpected character '{}'", c)))
        }
        Some(_) => {
            if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
                return Err(TypeError::malformed(
                    input,
                    format!("unexpected character '{}'", bad),
                ));
            }
            Ok(TypeRef::named(s))
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}
