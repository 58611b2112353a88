//! Renderer entry point.

use crate::config::RenderConfig;
use crate::fragment::Fragment;

/// Renders schema metadata into fragment trees.
///
/// Holds only configuration; the page renderers live in sibling modules as
/// further `impl DocRenderer` blocks.
#[derive(Debug, Clone, Default)]
pub struct DocRenderer {
    pub(crate) config: RenderConfig,
}

impl DocRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Markdown for a description, or the placeholder when there is none.
    pub(crate) fn description(&self, description: Option<&str>) -> Fragment {
        let source = match description {
            Some(text) if !text.is_empty() => text,
            _ => self.config.no_description_text.as_str(),
        };
        Fragment::markdown(crate::class::DOC_TYPE_DESCRIPTION, source)
    }

    /// A `doc-category` block titled `title`.
    pub(crate) fn category(&self, title: &str, items: Vec<Fragment>) -> Fragment {
        let mut children = Vec::with_capacity(items.len() + 1);
        children.push(Fragment::block(
            Some(crate::class::DOC_CATEGORY_TITLE),
            vec![Fragment::text(title)],
        ));
        children.extend(items);
        Fragment::block(Some(crate::class::DOC_CATEGORY), children)
    }

    /// A `doc-category-item` block keyed for sibling identity.
    pub(crate) fn category_item(&self, key: &str, children: Vec<Fragment>) -> Fragment {
        Fragment::block(Some(crate::class::DOC_CATEGORY_ITEM), children).with_key(key)
    }
}
