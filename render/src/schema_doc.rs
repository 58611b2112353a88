//! Schema overview page.

use graphdoc_registry::{Schema, TypeDef};
use tracing::debug;

use crate::class;
use crate::fragment::Fragment;
use crate::renderer::DocRenderer;

const INTRO: &str = "A GraphQL schema provides a root type for each kind of operation.";

impl DocRenderer {
    /// Render the schema overview: an introduction and the root types.
    pub fn schema_doc(&self, schema: &Schema) -> Fragment {
        debug!(types = schema.type_count(), "rendering schema doc");

        let roots = [
            ("query", schema.query_type()),
            ("mutation", schema.mutation_type()),
            ("subscription", schema.subscription_type()),
        ];
        let items = roots
            .into_iter()
            .filter_map(|(keyword, root)| root.map(|t| self.root_item(keyword, t)))
            .collect();

        Fragment::block(
            None,
            vec![
                Fragment::markdown(class::DOC_TYPE_DESCRIPTION, INTRO),
                self.category("root types", items),
            ],
        )
    }

    fn root_item(&self, keyword: &str, root: &TypeDef) -> Fragment {
        self.category_item(
            keyword,
            vec![
                Fragment::inline(Some(class::KEYWORD), vec![Fragment::text(keyword)]),
                Fragment::text(": "),
                Fragment::link(class::TYPE_NAME, &root.name, &root.name),
            ],
        )
    }
}
