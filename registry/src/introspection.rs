//! Introspection JSON import and export.
//!
//! Accepts the result of the standard introspection query, either as the
//! full response (`{"data": {"__schema": ..}}`), the `{"__schema": ..}`
//! object, or the bare schema object. Field entries may carry the
//! `constraints` extension.

use crate::{
    ArgDef, EnumValueDef, FieldDef, RegistryError, RegistryResult, Schema, SchemaBuilder,
    TypeDef,
};
use graphdoc_constraint::ConstraintExpr;
use graphdoc_core::{TypeKind, TypeRef};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as Json};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    query_type: Option<NamedRef>,
    mutation_type: Option<NamedRef>,
    subscription_type: Option<NamedRef>,
    types: Vec<FullType>,
    #[serde(default)]
    directives: Vec<Json>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullType {
    kind: TypeKind,
    name: String,
    description: Option<String>,
    fields: Option<Vec<Field>>,
    input_fields: Option<Vec<InputValue>>,
    interfaces: Option<Vec<TypeRefDto>>,
    enum_values: Option<Vec<EnumValue>>,
    possible_types: Option<Vec<TypeRefDto>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Field {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<InputValue>,
    #[serde(rename = "type")]
    type_ref: TypeRefDto,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    constraints: Option<Vec<Json>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    type_ref: TypeRefDto,
    default_value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeRefDto {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<TypeRefDto>>,
}

impl TypeRefDto {
    fn to_type_ref(&self) -> RegistryResult<TypeRef> {
        match self.kind.as_str() {
            "NON_NULL" => Ok(TypeRef::non_null(self.wrapped()?.to_type_ref()?)),
            "LIST" => Ok(TypeRef::list(self.wrapped()?.to_type_ref()?)),
            _ => Ok(TypeRef::named(self.named()?)),
        }
    }

    fn wrapped(&self) -> RegistryResult<&TypeRefDto> {
        self.of_type.as_deref().ok_or_else(|| {
            RegistryError::MalformedIntrospection(format!("{} type without ofType", self.kind))
        })
    }

    fn named(&self) -> RegistryResult<String> {
        self.name.clone().ok_or_else(|| {
            RegistryError::MalformedIntrospection(format!("{} type without name", self.kind))
        })
    }
}

impl InputValue {
    fn into_arg(self) -> RegistryResult<ArgDef> {
        Ok(ArgDef {
            type_ref: self.type_ref.to_type_ref()?,
            name: self.name,
            description: self.description,
            default_value: self.default_value,
        })
    }

    fn into_input_field(self) -> RegistryResult<FieldDef> {
        let mut field = FieldDef::new(self.name, self.type_ref.to_type_ref()?);
        field.description = self.description;
        field.default_value = self.default_value;
        Ok(field)
    }
}

impl Field {
    fn into_field_def(self, type_name: &str) -> RegistryResult<FieldDef> {
        let constraints = self
            .constraints
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let path = format!("{}.{}.constraints[{}]", type_name, self.name, i);
                ConstraintExpr::from_json_at(value, &path)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut field = FieldDef::new(self.name, self.type_ref.to_type_ref()?);
        field.description = self.description;
        field.args = self
            .args
            .into_iter()
            .map(InputValue::into_arg)
            .collect::<RegistryResult<Vec<_>>>()?;
        field.is_deprecated = self.is_deprecated;
        field.deprecation_reason = self.deprecation_reason;
        field.constraints = constraints;
        Ok(field)
    }
}

impl FullType {
    fn into_type_def(self) -> RegistryResult<TypeDef> {
        let mut def = TypeDef::new(self.name, self.kind);
        def.description = self.description;

        for field in self.fields.unwrap_or_default() {
            let field = field.into_field_def(&def.name)?;
            def.fields.push(field);
        }
        for input in self.input_fields.unwrap_or_default() {
            def.fields.push(input.into_input_field()?);
        }

        def.interfaces = self
            .interfaces
            .unwrap_or_default()
            .iter()
            .map(TypeRefDto::named)
            .collect::<RegistryResult<Vec<_>>>()?;

        // Interface implementations are derived from the objects
        if def.kind == TypeKind::Union {
            def.possible_types = self
                .possible_types
                .unwrap_or_default()
                .iter()
                .map(TypeRefDto::named)
                .collect::<RegistryResult<Vec<_>>>()?;
        }

        def.enum_values = self
            .enum_values
            .unwrap_or_default()
            .into_iter()
            .map(|v| EnumValueDef {
                name: v.name,
                description: v.description,
                is_deprecated: v.is_deprecated,
                deprecation_reason: v.deprecation_reason,
            })
            .collect();

        Ok(def)
    }
}

fn unwrap_envelope(mut value: Json) -> RegistryResult<Json> {
    if let Some(data) = value.get_mut("data").map(Json::take) {
        value = data;
    }
    if let Some(schema) = value.get_mut("__schema").map(Json::take) {
        return Ok(schema);
    }
    if value.get("types").is_some() {
        Ok(value)
    } else {
        Err(RegistryError::MalformedIntrospection(
            "expected a __schema object with a types list".to_string(),
        ))
    }
}

impl Schema {
    /// Load a schema from introspection JSON text.
    pub fn from_introspection_str(source: &str) -> RegistryResult<Schema> {
        let value: Json = serde_json::from_str(source)?;
        Self::from_introspection(value)
    }

    /// Load a schema from an introspection JSON value.
    pub fn from_introspection(value: Json) -> RegistryResult<Schema> {
        let dto: IntrospectionSchema = serde_json::from_value(unwrap_envelope(value)?)?;

        let mut builder = SchemaBuilder::empty();
        for full_type in dto.types {
            builder.add_type_def(full_type.into_type_def()?)?;
        }
        if let Some(root) = dto.query_type {
            builder.query(root.name);
        }
        if let Some(root) = dto.mutation_type {
            builder.mutation(root.name);
        }
        if let Some(root) = dto.subscription_type {
            builder.subscription(root.name);
        }

        let schema = builder.build()?;
        debug!(types = schema.type_count(), "loaded introspection schema");
        Ok(schema)
    }

    /// Export the schema as `{"__schema": ..}` introspection JSON.
    pub fn to_introspection(&self) -> RegistryResult<Json> {
        let types = self
            .all_types()
            .map(|t| self.export_type(t))
            .collect::<RegistryResult<Vec<_>>>()?;

        let root = |t: Option<&TypeDef>| {
            t.map(|t| NamedRef {
                name: t.name.clone(),
            })
        };

        let dto = IntrospectionSchema {
            query_type: root(self.query_type()),
            mutation_type: root(self.mutation_type()),
            subscription_type: root(self.subscription_type()),
            types,
            directives: Vec::new(),
        };

        Ok(json!({ "__schema": serde_json::to_value(dto)? }))
    }

    fn export_type(&self, def: &TypeDef) -> RegistryResult<FullType> {
        let named = |name: &String| self.export_type_ref(&TypeRef::named(name.clone()));

        let fields = if def.kind.has_fields() {
            Some(
                def.fields
                    .iter()
                    .map(|f| self.export_field(f))
                    .collect::<RegistryResult<Vec<_>>>()?,
            )
        } else {
            None
        };

        let input_fields = (def.kind == TypeKind::InputObject).then(|| {
            def.fields
                .iter()
                .map(|f| InputValue {
                    name: f.name.clone(),
                    description: f.description.clone(),
                    type_ref: self.export_type_ref(&f.type_ref),
                    default_value: f.default_value.clone(),
                })
                .collect()
        });

        let possible_types = match def.kind {
            TypeKind::Union => Some(def.possible_types.iter().map(named).collect()),
            TypeKind::Interface => Some(
                self.implementations(&def.name)
                    .into_iter()
                    .map(|t| named(&t.name))
                    .collect(),
            ),
            _ => None,
        };

        Ok(FullType {
            kind: def.kind,
            name: def.name.clone(),
            description: def.description.clone(),
            fields,
            input_fields,
            interfaces: def
                .kind
                .has_fields()
                .then(|| def.interfaces.iter().map(named).collect()),
            enum_values: (def.kind == TypeKind::Enum).then(|| {
                def.enum_values
                    .iter()
                    .map(|v| EnumValue {
                        name: v.name.clone(),
                        description: v.description.clone(),
                        is_deprecated: v.is_deprecated,
                        deprecation_reason: v.deprecation_reason.clone(),
                    })
                    .collect()
            }),
            possible_types,
        })
    }

    fn export_field(&self, field: &FieldDef) -> RegistryResult<Field> {
        let constraints = if field.constraints.is_empty() {
            None
        } else {
            Some(
                field
                    .constraints
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        };

        Ok(Field {
            name: field.name.clone(),
            description: field.description.clone(),
            args: field
                .args
                .iter()
                .map(|a| InputValue {
                    name: a.name.clone(),
                    description: a.description.clone(),
                    type_ref: self.export_type_ref(&a.type_ref),
                    default_value: a.default_value.clone(),
                })
                .collect(),
            type_ref: self.export_type_ref(&field.type_ref),
            is_deprecated: field.is_deprecated,
            deprecation_reason: field.deprecation_reason.clone(),
            constraints,
        })
    }

    fn export_type_ref(&self, type_ref: &TypeRef) -> TypeRefDto {
        match type_ref {
            TypeRef::Named(name) => TypeRefDto {
                kind: self
                    .get_type(name)
                    .map_or(TypeKind::Scalar.as_str(), |t| t.kind.as_str())
                    .to_string(),
                name: Some(name.clone()),
                of_type: None,
            },
            TypeRef::List(inner) => TypeRefDto {
                kind: "LIST".to_string(),
                name: None,
                of_type: Some(Box::new(self.export_type_ref(inner))),
            },
            TypeRef::NonNull(inner) => TypeRefDto {
                kind: "NON_NULL".to_string(),
                name: None,
                of_type: Some(Box::new(self.export_type_ref(inner))),
            },
        }
    }
}
