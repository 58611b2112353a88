//! The Schema - immutable documentation lookup.

use crate::{FieldDef, TypeDef};
use graphdoc_constraint::{ConstraintChecker, Violations};
use graphdoc_core::TypeKind;
use std::collections::HashMap;

/// The Schema provides lookup of type and field definitions for rendering.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Schema {
    /// Type definitions in declaration order.
    types: Vec<TypeDef>,
    /// Type index lookup by name.
    type_names: HashMap<String, usize>,

    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

impl Schema {
    /// Create a schema (use SchemaBuilder for construction).
    pub(crate) fn new(
        types: Vec<TypeDef>,
        type_names: HashMap<String, usize>,
        query_type: Option<String>,
        mutation_type: Option<String>,
        subscription_type: Option<String>,
    ) -> Self {
        Self {
            types,
            type_names,
            query_type,
            mutation_type,
            subscription_type,
        }
    }

    // ==================== Type Lookups ====================

    /// Get a type definition by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_names.get(name).map(|&i| &self.types[i])
    }

    /// Get all type definitions in declaration order.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter()
    }

    /// Get the number of types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get all object types implementing an interface.
    pub fn implementations(&self, interface: &str) -> Vec<&TypeDef> {
        self.types
            .iter()
            .filter(|t| t.kind == TypeKind::Object && t.interfaces.iter().any(|i| i == interface))
            .collect()
    }

    // ==================== Root Types ====================

    /// Get the query root type.
    pub fn query_type(&self) -> Option<&TypeDef> {
        self.query_type.as_deref().and_then(|n| self.get_type(n))
    }

    /// Get the mutation root type.
    pub fn mutation_type(&self) -> Option<&TypeDef> {
        self.mutation_type.as_deref().and_then(|n| self.get_type(n))
    }

    /// Get the subscription root type.
    pub fn subscription_type(&self) -> Option<&TypeDef> {
        self.subscription_type.as_deref().and_then(|n| self.get_type(n))
    }

    // ==================== Field Lookups ====================

    /// Get a field by its `Type.field` coordinate.
    pub fn get_field(&self, coordinate: &str) -> Option<&FieldDef> {
        let (type_name, field_name) = coordinate.split_once('.')?;
        self.get_type(type_name)?.get_field(field_name)
    }

    /// Iterate over every field of every type with its owning type.
    pub fn all_fields(&self) -> impl Iterator<Item = (&TypeDef, &FieldDef)> {
        self.types
            .iter()
            .flat_map(|t| t.fields.iter().map(move |f| (t, f)))
    }

    // ==================== Constraint Checks ====================

    /// Check every field's constraints against its arguments.
    pub fn check_constraints(&self) -> Violations {
        let checker = ConstraintChecker::new();
        let mut violations = Violations::new();
        for (type_def, field) in self.all_fields() {
            if field.constraints.is_empty() {
                continue;
            }
            let coordinate = format!("{}.{}", type_def.name, field.name);
            violations.merge(checker.check_field(
                &coordinate,
                &field.arg_names(),
                &field.constraints,
            ));
        }
        violations
    }
}
