//! Schema definition types.

use graphdoc_constraint::ConstraintExpr;
use graphdoc_core::{TypeKind, TypeRef};

/// Argument (or input value) definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgDef {
    /// Argument name.
    pub name: String,
    /// Markdown description.
    pub description: Option<String>,
    /// Declared type.
    pub type_ref: TypeRef,
    /// Default value, printed as a GraphQL literal.
    pub default_value: Option<String>,
}

impl ArgDef {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
            default_value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }
}

/// Field definition within an object, interface or input object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Markdown description.
    pub description: Option<String>,
    /// Declared type.
    pub type_ref: TypeRef,
    /// Arguments, in declaration order.
    pub args: Vec<ArgDef>,
    /// Default value of an input field, printed as a GraphQL literal.
    pub default_value: Option<String>,
    /// Whether the field is deprecated.
    pub is_deprecated: bool,
    /// Markdown deprecation notice.
    pub deprecation_reason: Option<String>,
    /// Relations between the field's arguments, in declaration order.
    pub constraints: Vec<ConstraintExpr>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
            args: Vec::new(),
            default_value: None,
            is_deprecated: false,
            deprecation_reason: None,
            constraints: Vec::new(),
        }
    }

    /// Get an argument definition by name.
    pub fn get_arg(&self, name: &str) -> Option<&ArgDef> {
        self.args.iter().find(|a| a.name == name)
    }

    /// Get all argument names.
    pub fn arg_names(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Enum value definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDef {
    /// Value name.
    pub name: String,
    /// Markdown description.
    pub description: Option<String>,
    /// Whether the value is deprecated.
    pub is_deprecated: bool,
    /// Markdown deprecation notice.
    pub deprecation_reason: Option<String>,
}

impl EnumValueDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.is_deprecated = true;
        self.deprecation_reason = Some(reason.into());
        self
    }
}

/// Named type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Markdown description.
    pub description: Option<String>,
    /// Output fields (objects, interfaces) or input fields (input objects).
    pub fields: Vec<FieldDef>,
    /// Implemented interfaces (objects).
    pub interfaces: Vec<String>,
    /// Member types (unions).
    pub possible_types: Vec<String>,
    /// Values (enums).
    pub enum_values: Vec<EnumValueDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            possible_types: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this type has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Returns true for introspection types (`__Schema`, `__Type`, ...).
    pub fn is_introspection(&self) -> bool {
        self.name.starts_with("__")
    }
}
