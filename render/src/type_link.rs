//! Type references, default values and arguments.

use graphdoc_core::TypeRef;
use graphdoc_registry::ArgDef;

use crate::class;
use crate::fragment::Fragment;
use crate::renderer::DocRenderer;

impl DocRenderer {
    /// Render a type reference in GraphQL syntax, the named type as a link.
    pub fn type_link(&self, type_ref: &TypeRef) -> Fragment {
        match type_ref {
            TypeRef::Named(name) => Fragment::link(class::TYPE_NAME, name, name),
            TypeRef::List(inner) => Fragment::inline(
                None,
                vec![Fragment::text("["), self.type_link(inner), Fragment::text("]")],
            ),
            TypeRef::NonNull(inner) => {
                Fragment::inline(None, vec![self.type_link(inner), Fragment::text("!")])
            }
        }
    }

    /// Render ` = <value>`, or nothing when there is no default.
    pub fn default_value(&self, value: Option<&str>) -> Fragment {
        match value {
            Some(value) if self.config.show_default_values => Fragment::inline(
                None,
                vec![
                    Fragment::text(" = "),
                    Fragment::inline(Some(class::ARG_DEFAULT_VALUE), vec![Fragment::text(value)]),
                ],
            ),
            _ => Fragment::Empty,
        }
    }

    /// Render `name: Type = default`.
    pub fn argument(&self, arg: &ArgDef) -> Fragment {
        Fragment::inline(
            Some(class::ARG),
            vec![
                Fragment::inline(Some(class::ARG_NAME), vec![Fragment::text(&arg.name)]),
                Fragment::text(": "),
                self.type_link(&arg.type_ref),
                self.default_value(arg.default_value.as_deref()),
            ],
        )
    }
}
