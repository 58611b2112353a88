//! Scenario definition and runner.

use graphdoc_registry::Schema;
use graphdoc_render::{DocRenderer, Fragment, RenderConfig, RenderResult};

use crate::assertion::PageAssertion;
use crate::error::{ScenarioError, ScenarioResult};

/// A page to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// The schema overview.
    Schema,
    /// A named type.
    Type(String),
    /// A field, as `Type.field`.
    Field(String),
}

impl Page {
    fn label(&self) -> String {
        match self {
            Page::Schema => "schema".to_string(),
            Page::Type(name) => format!("type {}", name),
            Page::Field(coordinate) => format!("field {}", coordinate),
        }
    }
}

/// A list of pages and what each should look like.
pub struct Scenario {
    name: String,
    schema: Option<Schema>,
    config: RenderConfig,
    steps: Vec<(Page, PageAssertion)>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            config: RenderConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Render against `schema` instead of the example schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn page(mut self, page: Page, f: impl FnOnce(PageAssertion) -> PageAssertion) -> Self {
        self.steps.push((page, f(PageAssertion::new())));
        self
    }

    pub fn field(self, coordinate: &str, f: impl FnOnce(PageAssertion) -> PageAssertion) -> Self {
        self.page(Page::Field(coordinate.to_string()), f)
    }

    pub fn type_page(self, name: &str, f: impl FnOnce(PageAssertion) -> PageAssertion) -> Self {
        self.page(Page::Type(name.to_string()), f)
    }

    /// Render every page and check it.
    pub fn run(self) -> ScenarioResult<()> {
        let schema = match self.schema {
            Some(schema) => schema,
            None => graphdoc_example::example_schema()?,
        };
        let renderer = DocRenderer::with_config(self.config);

        for (page, assertion) in &self.steps {
            let result = render(&renderer, &schema, page).ok_or_else(|| {
                ScenarioError::UnknownPage {
                    scenario: self.name.clone(),
                    page: page.label(),
                }
            })?;
            assertion
                .verify(result.as_ref())
                .map_err(|message| ScenarioError::assertion_failed(&self.name, page.label(), message))?;
        }
        Ok(())
    }
}

fn render(renderer: &DocRenderer, schema: &Schema, page: &Page) -> Option<RenderResult<Fragment>> {
    match page {
        Page::Schema => Some(Ok(renderer.schema_doc(schema))),
        Page::Type(name) => {
            let type_def = schema.get_type(name)?;
            Some(Ok(renderer.type_doc(schema, type_def)))
        }
        Page::Field(coordinate) => Some(renderer.field_doc(schema.get_field(coordinate)?)),
    }
}
