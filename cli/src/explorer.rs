//! Explorer state: the loaded schema and a configured renderer.

use std::fs;
use std::path::Path;

use graphdoc_constraint::Violations;
use graphdoc_registry::{RegistryError, Schema};
use graphdoc_render::DocRenderer;
use tracing::info;

use crate::config::{ExplorerConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::format::format_fragment;

/// Renders documentation pages of one schema.
pub struct Explorer {
    schema: Schema,
    renderer: DocRenderer,
    format: OutputFormat,
}

impl Explorer {
    /// Create an explorer over an already-built schema.
    pub fn new(schema: Schema, config: ExplorerConfig) -> Self {
        Self {
            schema,
            renderer: DocRenderer::with_config(config.render),
            format: config.format,
        }
    }

    /// Load the schema named by `config`, or the example schema.
    pub fn from_config(config: ExplorerConfig) -> CliResult<Self> {
        let schema = match &config.schema {
            Some(path) => load_schema(path)?,
            None => graphdoc_example::example_schema()?,
        };
        info!(types = schema.type_count(), "schema ready");
        Ok(Self::new(schema, config))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The schema overview page.
    pub fn schema_doc(&self) -> CliResult<String> {
        format_fragment(&self.renderer.schema_doc(&self.schema), self.format)
    }

    /// The page of one named type.
    pub fn type_doc(&self, name: &str) -> CliResult<String> {
        let type_def = self
            .schema
            .get_type(name)
            .ok_or_else(|| CliError::UnknownType(name.to_string()))?;
        format_fragment(&self.renderer.type_doc(&self.schema, type_def), self.format)
    }

    /// The page of one field, addressed as `Type.field`.
    pub fn field_doc(&self, path: &str) -> CliResult<String> {
        let (type_name, field_name) = path
            .split_once('.')
            .filter(|(t, f)| !t.is_empty() && !f.is_empty())
            .ok_or_else(|| CliError::InvalidFieldPath(path.to_string()))?;
        let type_def = self
            .schema
            .get_type(type_name)
            .ok_or_else(|| CliError::UnknownType(type_name.to_string()))?;
        let field = type_def
            .get_field(field_name)
            .ok_or_else(|| CliError::UnknownField(path.to_string()))?;
        format_fragment(&self.renderer.field_doc(field)?, self.format)
    }

    /// Check every field's constraints against its arguments.
    pub fn check(&self) -> Violations {
        self.schema.check_constraints()
    }

    /// The schema as pretty-printed introspection JSON.
    pub fn export(&self) -> CliResult<String> {
        let value = self.schema.to_introspection()?;
        let json = serde_json::to_string_pretty(&value).map_err(RegistryError::from)?;
        Ok(json)
    }
}

fn load_schema(path: &Path) -> CliResult<Schema> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Schema::from_introspection_str(&source)?)
}
