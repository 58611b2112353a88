//! Field documentation page.

use graphdoc_registry::FieldDef;
use tracing::{debug, trace};

use crate::class;
use crate::error::RenderResult;
use crate::fragment::Fragment;
use crate::renderer::DocRenderer;

impl DocRenderer {
    /// Render the documentation page of one field.
    ///
    /// Sections, in order: description, deprecation notice, type, arguments,
    /// constraints. The last two appear only when non-empty.
    pub fn field_doc(&self, field: &FieldDef) -> RenderResult<Fragment> {
        debug!(
            field = %field.name,
            args = field.args.len(),
            constraints = field.constraints.len(),
            "rendering field doc"
        );

        let mut sections = vec![self.description(field.description.as_deref())];

        if let Some(reason) = &field.deprecation_reason {
            sections.push(Fragment::markdown(class::DOC_DEPRECATION, reason));
        }

        sections.push(self.category("type", vec![self.type_link(&field.type_ref)]));

        if !field.args.is_empty() {
            let items = field
                .args
                .iter()
                .map(|arg| {
                    let mut children = vec![self.argument(arg)];
                    if let Some(description) = &arg.description {
                        children.push(Fragment::markdown(class::DOC_VALUE_DESCRIPTION, description));
                    }
                    self.category_item(&arg.name, children)
                })
                .collect();
            sections.push(self.category("arguments", items));
        }

        if !field.constraints.is_empty() {
            let items = field
                .constraints
                .iter()
                .map(|expr| Ok(self.category_item(&expr.name, vec![self.constraint(expr)?])))
                .collect::<RenderResult<Vec<_>>>()?;
            sections.push(self.category("constraints", items));
        }

        Ok(Fragment::block(None, sections))
    }
}

/// Memoized field page.
///
/// Re-renders only when handed a different field descriptor. Identity is the
/// descriptor's address: an equal copy elsewhere in memory counts as a new
/// field.
#[derive(Debug)]
pub struct FieldDocView<'s> {
    renderer: &'s DocRenderer,
    last: Option<(&'s FieldDef, Fragment)>,
    renders: usize,
}

impl<'s> FieldDocView<'s> {
    pub fn new(renderer: &'s DocRenderer) -> Self {
        Self {
            renderer,
            last: None,
            renders: 0,
        }
    }

    /// Get the page for `field`, rendering it if the descriptor changed.
    pub fn render(&mut self, field: &'s FieldDef) -> RenderResult<&Fragment> {
        if let Some((prev, fragment)) = self.last.take() {
            if std::ptr::eq(prev, field) {
                trace!(field = %field.name, "field doc cache hit");
                return Ok(&self.last.insert((prev, fragment)).1);
            }
        }

        let fragment = self.renderer.field_doc(field)?;
        self.renders += 1;
        Ok(&self.last.insert((field, fragment)).1)
    }

    /// Number of full renders performed so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::error::RenderError;
    use graphdoc_constraint::ConstraintExpr;
    use graphdoc_core::TypeRef;
    use graphdoc_registry::ArgDef;
    use pretty_assertions::assert_eq;

    fn titles(page: &Fragment) -> Vec<String> {
        page.find_by_class(class::DOC_CATEGORY_TITLE)
            .iter()
            .map(|title| title.text_content())
            .collect()
    }

    fn create_business() -> FieldDef {
        let mut field = FieldDef::new("create_business", TypeRef::named("Business"));
        field.description = Some("Create a business".to_string());
        field.args = vec![
            ArgDef::new("name", TypeRef::non_null(TypeRef::named("String")))
                .with_description("Trading name"),
            ArgDef::new("street", TypeRef::named("String")),
            ArgDef::new("house_number", TypeRef::named("Int")),
        ];
        field.constraints = vec![
            ConstraintExpr::binary("WITH", "street", "house_number"),
            ConstraintExpr::binary("THEN", "house_number_addition", "house_number"),
        ];
        field
    }

    // ========== TEST: sections ==========

    #[test]
    fn test_section_order() {
        // GIVEN a field with args and constraints
        let field = create_business();

        // WHEN its page is rendered
        let page = DocRenderer::new().field_doc(&field).unwrap();

        // THEN the description comes first and categories follow in order
        assert_eq!(page.children()[0].class(), Some(class::DOC_TYPE_DESCRIPTION));
        assert_eq!(page.children()[0].text_content(), "Create a business");
        assert_eq!(titles(&page), vec!["type", "arguments", "constraints"]);
    }

    #[test]
    fn test_constraints_in_input_order() {
        let page = DocRenderer::new().field_doc(&create_business()).unwrap();
        let category = page.children().last().unwrap();

        let items: Vec<_> = category
            .find_by_class(class::DOC_CATEGORY_ITEM)
            .iter()
            .map(|item| {
                let element = item.as_element().unwrap();
                (element.key.clone().unwrap(), item.text_content())
            })
            .collect();
        assert_eq!(
            items,
            vec![
                ("WITH".to_string(), "WITH(street, house_number)".to_string()),
                (
                    "THEN".to_string(),
                    "THEN(house_number_addition, house_number)".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_argument_items() {
        let page = DocRenderer::new().field_doc(&create_business()).unwrap();
        let arguments = &page.children()[2];

        let items = arguments.find_by_class(class::DOC_CATEGORY_ITEM);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_element().unwrap().key.as_deref(), Some("name"));
        assert_eq!(items[0].text_content(), "name: String!Trading name");
        assert_eq!(arguments.count_class(class::DOC_VALUE_DESCRIPTION), 1);
    }

    #[test]
    fn test_minimal_field() {
        // GIVEN a field without description, args or constraints
        let field = FieldDef::new("id", TypeRef::non_null(TypeRef::named("ID")));

        // WHEN rendered
        let page = DocRenderer::new().field_doc(&field).unwrap();

        // THEN only the placeholder description and the type are shown
        assert_eq!(page.children().len(), 2);
        assert_eq!(page.children()[0].text_content(), "No Description");
        assert_eq!(titles(&page), vec!["type"]);
        assert_eq!(page.count_class(class::CONSTRAINT), 0);
    }

    #[test]
    fn test_only_empty_description_gets_placeholder() {
        // GIVEN one field with a blank description and one with an empty one
        let mut blank = FieldDef::new("blank", TypeRef::named("String"));
        blank.description = Some("   ".to_string());
        let mut empty = FieldDef::new("empty", TypeRef::named("String"));
        empty.description = Some(String::new());

        // WHEN both are rendered
        let renderer = DocRenderer::new();
        let blank_page = renderer.field_doc(&blank).unwrap();
        let empty_page = renderer.field_doc(&empty).unwrap();

        // THEN whitespace is kept as written and only the empty text is replaced
        assert_eq!(blank_page.children()[0].text_content(), "   ");
        assert_eq!(empty_page.children()[0].text_content(), "No Description");
    }

    #[test]
    fn test_deprecation_notice() {
        let mut field = FieldDef::new("old", TypeRef::named("String"));
        field.is_deprecated = true;
        field.deprecation_reason = Some("Use `new` instead".to_string());

        let page = DocRenderer::new().field_doc(&field).unwrap();

        assert_eq!(page.children()[1].class(), Some(class::DOC_DEPRECATION));
        assert_eq!(page.children()[1].text_content(), "Use `new` instead");
    }

    #[test]
    fn test_configured_placeholder() {
        let renderer =
            DocRenderer::with_config(RenderConfig::default().with_no_description_text("TBD"));
        let page = renderer
            .field_doc(&FieldDef::new("id", TypeRef::named("ID")))
            .unwrap();
        assert_eq!(page.children()[0].text_content(), "TBD");
    }

    #[test]
    fn test_constraint_error_propagates() {
        let mut field = FieldDef::new("broken", TypeRef::named("String"));
        field.constraints = vec![ConstraintExpr::new("", "a")];

        let result = DocRenderer::new().field_doc(&field);
        assert!(matches!(result, Err(RenderError::MissingInput(_))));
    }

    // ========== TEST: memoization ==========

    #[test]
    fn test_view_reuses_render_for_same_descriptor() {
        let renderer = DocRenderer::new();
        let field = create_business();
        let mut view = FieldDocView::new(&renderer);

        let first = view.render(&field).unwrap().clone();
        let second = view.render(&field).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(view.render_count(), 1);
    }

    #[test]
    fn test_view_rerenders_for_equal_copy() {
        // GIVEN two equal descriptors at different addresses
        let renderer = DocRenderer::new();
        let field = create_business();
        let copy = field.clone();
        let mut view = FieldDocView::new(&renderer);

        // WHEN both are shown
        let first = view.render(&field).unwrap().clone();
        let second = view.render(&copy).unwrap().clone();

        // THEN the copy counts as a change but renders the same tree
        assert_eq!(view.render_count(), 2);
        assert_eq!(first, second);

        // AND going back to the original renders again
        view.render(&field).unwrap();
        assert_eq!(view.render_count(), 3);
    }
}
