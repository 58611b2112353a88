//! SchemaBuilder for constructing an immutable Schema.

use crate::{ArgDef, EnumValueDef, FieldDef, Schema, TypeDef};
use graphdoc_constraint::{ConstraintError, ConstraintExpr, Operand, MAX_DECODE_DEPTH};
use graphdoc_core::{TypeError, TypeKind, TypeRef, Value};
use regex_lite::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;

/// GraphQL name syntax.
const NAME_PATTERN: &str = "^[_A-Za-z][_0-9A-Za-z]*$";

/// Errors that can occur during schema construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate field name: {type_name}.{field}")]
    DuplicateFieldName { type_name: String, field: String },

    #[error("Invalid name '{name}' in {context}")]
    InvalidName { name: String, context: String },

    #[error("Unknown type '{name}' referenced by {referenced_by}")]
    UnknownType { name: String, referenced_by: String },

    #[error("Invalid type reference at {coordinate}: {source}")]
    Type {
        coordinate: String,
        #[source]
        source: TypeError,
    },

    #[error("Invalid constraint on {coordinate}: {reason}")]
    InvalidConstraint { coordinate: String, reason: String },

    #[error("Constraint error: {0}")]
    Constraint(#[from] ConstraintError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed introspection result: {0}")]
    MalformedIntrospection(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

fn name_regex() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"))
}

fn check_name(name: &str, context: impl FnOnce() -> String) -> RegistryResult<()> {
    if name_regex().is_match(name) {
        Ok(())
    } else {
        Err(RegistryError::InvalidName {
            name: name.to_string(),
            context: context(),
        })
    }
}

fn parse_type(syntax: &str, coordinate: &str) -> RegistryResult<TypeRef> {
    TypeRef::parse(syntax).map_err(|source| RegistryError::Type {
        coordinate: coordinate.to_string(),
        source,
    })
}

/// Builder for constructing an immutable Schema.
#[derive(Debug)]
pub struct SchemaBuilder {
    /// Types in declaration order.
    types: Vec<TypeDef>,
    /// Type name to index mapping.
    type_names: HashMap<String, usize>,

    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// Create a builder with the built-in scalars registered.
    pub fn new() -> Self {
        let mut builder = Self::empty();
        for (name, description) in BUILTIN_SCALARS {
            let mut scalar = TypeDef::new(*name, TypeKind::Scalar);
            scalar.description = Some(description.to_string());
            builder.insert(scalar);
        }
        builder
    }

    /// Create a builder with no types at all.
    pub fn empty() -> Self {
        Self {
            types: Vec::new(),
            type_names: HashMap::new(),
            query_type: None,
            mutation_type: None,
            subscription_type: None,
        }
    }

    /// Add a type definition.
    pub fn add_type(&mut self, name: impl Into<String>, kind: TypeKind) -> TypeBuilder<'_> {
        TypeBuilder {
            builder: self,
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            possible_types: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Add a fully formed type definition after validating it.
    pub fn add_type_def(&mut self, type_def: TypeDef) -> RegistryResult<()> {
        if self.type_names.contains_key(&type_def.name) {
            return Err(RegistryError::DuplicateTypeName(type_def.name));
        }
        check_name(&type_def.name, || "type name".to_string())?;

        let mut field_names = HashSet::new();
        for field in &type_def.fields {
            let coordinate = format!("{}.{}", type_def.name, field.name);
            check_name(&field.name, || format!("field of {}", type_def.name))?;
            if !field_names.insert(field.name.as_str()) {
                return Err(RegistryError::DuplicateFieldName {
                    type_name: type_def.name.clone(),
                    field: field.name.clone(),
                });
            }
            for arg in &field.args {
                check_name(&arg.name, || format!("argument of {}", coordinate))?;
            }
            for constraint in &field.constraints {
                check_constraint(constraint, &coordinate)?;
            }
        }
        for value in &type_def.enum_values {
            check_name(&value.name, || format!("value of {}", type_def.name))?;
        }

        self.insert(type_def);
        Ok(())
    }

    fn insert(&mut self, type_def: TypeDef) {
        self.type_names
            .insert(type_def.name.clone(), self.types.len());
        self.types.push(type_def);
    }

    /// Set the query root type.
    pub fn query(&mut self, name: impl Into<String>) -> &mut Self {
        self.query_type = Some(name.into());
        self
    }

    /// Set the mutation root type.
    pub fn mutation(&mut self, name: impl Into<String>) -> &mut Self {
        self.mutation_type = Some(name.into());
        self
    }

    /// Set the subscription root type.
    pub fn subscription(&mut self, name: impl Into<String>) -> &mut Self {
        self.subscription_type = Some(name.into());
        self
    }

    /// Check if a type name is already registered.
    pub fn has_type(&self, name: &str) -> bool {
        self.type_names.contains_key(name)
    }

    /// Build the immutable Schema.
    pub fn build(self) -> RegistryResult<Schema> {
        // Every named reference must resolve
        let resolve = |name: &str, referenced_by: &dyn Fn() -> String| {
            if self.type_names.contains_key(name) {
                Ok(())
            } else {
                Err(RegistryError::UnknownType {
                    name: name.to_string(),
                    referenced_by: referenced_by(),
                })
            }
        };

        for type_def in &self.types {
            for field in &type_def.fields {
                resolve(field.type_ref.named_type(), &|| {
                    format!("{}.{}", type_def.name, field.name)
                })?;
                for arg in &field.args {
                    resolve(arg.type_ref.named_type(), &|| {
                        format!("{}.{}({}:)", type_def.name, field.name, arg.name)
                    })?;
                }
            }
            for iface in &type_def.interfaces {
                resolve(iface, &|| format!("{} implements", type_def.name))?;
            }
            for member in &type_def.possible_types {
                resolve(member, &|| format!("{} possible types", type_def.name))?;
            }
        }

        for (root, name) in [
            ("query", &self.query_type),
            ("mutation", &self.mutation_type),
            ("subscription", &self.subscription_type),
        ] {
            if let Some(name) = name {
                resolve(name, &|| format!("schema {} root", root))?;
            }
        }

        Ok(Schema::new(
            self.types,
            self.type_names,
            self.query_type,
            self.mutation_type,
            self.subscription_type,
        ))
    }
}

fn check_constraint(constraint: &ConstraintExpr, coordinate: &str) -> RegistryResult<()> {
    // Matches the decoder ceiling.
    if constraint.depth() > MAX_DECODE_DEPTH {
        return Err(RegistryError::InvalidConstraint {
            coordinate: coordinate.to_string(),
            reason: format!("nesting exceeds {} levels", MAX_DECODE_DEPTH),
        });
    }
    check_relation(constraint, coordinate)
}

fn check_relation(constraint: &ConstraintExpr, coordinate: &str) -> RegistryResult<()> {
    if constraint.name.is_empty() {
        return Err(RegistryError::InvalidConstraint {
            coordinate: coordinate.to_string(),
            reason: "relation name must not be empty".to_string(),
        });
    }
    for side in std::iter::once(&constraint.left_side).chain(constraint.right_side.as_ref()) {
        match side {
            Operand::Field(name) if name.is_empty() => {
                return Err(RegistryError::InvalidConstraint {
                    coordinate: coordinate.to_string(),
                    reason: format!("{} has an empty argument name", constraint.name),
                })
            }
            Operand::Field(_) => {}
            Operand::Nested(inner) => check_relation(inner, coordinate)?,
        }
    }
    Ok(())
}

const BUILTIN_SCALARS: &[(&str, &str)] = &[
    (
        "String",
        "The `String` scalar type represents textual data, represented as UTF-8 character sequences.",
    ),
    (
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric values.",
    ),
    (
        "Float",
        "The `Float` scalar type represents signed double-precision fractional values.",
    ),
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    (
        "ID",
        "The `ID` scalar type represents a unique identifier, often used to refetch an object.",
    ),
];

/// Argument under construction; the type is given in GraphQL syntax.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: String,
    type_syntax: String,
    description: Option<String>,
    default_value: Option<String>,
}

impl ArgSpec {
    fn new(name: impl Into<String>, type_syntax: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_syntax: type_syntax.into(),
            description: None,
            default_value: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into().to_string());
        self
    }

    fn finish(self, coordinate: &str) -> RegistryResult<ArgDef> {
        let type_ref = parse_type(&self.type_syntax, &format!("{}({}:)", coordinate, self.name))?;
        Ok(ArgDef {
            name: self.name,
            description: self.description,
            type_ref,
            default_value: self.default_value,
        })
    }
}

/// Field under construction; the type is given in GraphQL syntax.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    type_syntax: String,
    description: Option<String>,
    args: Vec<ArgSpec>,
    default_value: Option<String>,
    deprecation: Option<Option<String>>,
    constraints: Vec<ConstraintExpr>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, type_syntax: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_syntax: type_syntax.into(),
            description: None,
            args: Vec::new(),
            default_value: None,
            deprecation: None,
            constraints: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an argument.
    pub fn arg(mut self, name: impl Into<String>, type_syntax: impl Into<String>) -> Self {
        self.args.push(ArgSpec::new(name, type_syntax));
        self
    }

    /// Add an argument configured by `f`.
    pub fn arg_with(
        mut self,
        name: impl Into<String>,
        type_syntax: impl Into<String>,
        f: impl FnOnce(ArgSpec) -> ArgSpec,
    ) -> Self {
        self.args.push(f(ArgSpec::new(name, type_syntax)));
        self
    }

    /// Default value for an input field.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into().to_string());
        self
    }

    /// Mark as deprecated with a markdown reason.
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation = Some(Some(reason.into()));
        self
    }

    /// Declare a relation between arguments.
    pub fn constraint(mut self, constraint: ConstraintExpr) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn finish(self, type_name: &str) -> RegistryResult<FieldDef> {
        let coordinate = format!("{}.{}", type_name, self.name);
        let type_ref = parse_type(&self.type_syntax, &coordinate)?;
        let args = self
            .args
            .into_iter()
            .map(|arg| arg.finish(&coordinate))
            .collect::<RegistryResult<Vec<_>>>()?;
        Ok(FieldDef {
            name: self.name,
            description: self.description,
            type_ref,
            args,
            default_value: self.default_value,
            is_deprecated: self.deprecation.is_some(),
            deprecation_reason: self.deprecation.flatten(),
            constraints: self.constraints,
        })
    }
}

/// Builder for a type definition.
pub struct TypeBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    name: String,
    kind: TypeKind,
    description: Option<String>,
    fields: Vec<FieldSpec>,
    interfaces: Vec<String>,
    possible_types: Vec<String>,
    enum_values: Vec<EnumValueDef>,
}

impl<'a> TypeBuilder<'a> {
    /// Set the markdown description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, type_syntax: impl Into<String>) -> Self {
        self.fields.push(FieldSpec::new(name, type_syntax));
        self
    }

    /// Add a field configured by `f`.
    pub fn field_with(
        mut self,
        name: impl Into<String>,
        type_syntax: impl Into<String>,
        f: impl FnOnce(FieldSpec) -> FieldSpec,
    ) -> Self {
        self.fields.push(f(FieldSpec::new(name, type_syntax)));
        self
    }

    /// Declare an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a union member.
    pub fn possible_type(mut self, member: impl Into<String>) -> Self {
        self.possible_types.push(member.into());
        self
    }

    /// Add an enum value.
    pub fn value(mut self, value: EnumValueDef) -> Self {
        self.enum_values.push(value);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> RegistryResult<()> {
        let fields = self
            .fields
            .into_iter()
            .map(|field| field.finish(&self.name))
            .collect::<RegistryResult<Vec<_>>>()?;

        let type_def = TypeDef {
            name: self.name,
            kind: self.kind,
            description: self.description,
            fields,
            interfaces: self.interfaces,
            possible_types: self.possible_types,
            enum_values: self.enum_values,
        };

        self.builder.add_type_def(type_def)
    }
}
