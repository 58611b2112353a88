//! Type documentation page.

use graphdoc_core::TypeKind;
use graphdoc_registry::{EnumValueDef, FieldDef, Schema, TypeDef};
use tracing::debug;

use crate::class;
use crate::fragment::Fragment;
use crate::renderer::DocRenderer;

impl DocRenderer {
    /// Render the documentation page of a named type.
    ///
    /// `schema` resolves the implementations of an interface.
    pub fn type_doc(&self, schema: &Schema, type_def: &TypeDef) -> Fragment {
        debug!(type_name = %type_def.name, kind = %type_def.kind, "rendering type doc");

        let mut sections = vec![self.description(type_def.description.as_deref())];

        match type_def.kind {
            TypeKind::Object if !type_def.interfaces.is_empty() => {
                let links = type_def.interfaces.iter().map(String::as_str);
                sections.push(self.type_list("implements", links));
            }
            TypeKind::Interface => {
                let implementations = schema.implementations(&type_def.name);
                if !implementations.is_empty() {
                    let links = implementations.into_iter().map(|t| t.name.as_str());
                    sections.push(self.type_list("implementations", links));
                }
            }
            TypeKind::Union if !type_def.possible_types.is_empty() => {
                let links = type_def.possible_types.iter().map(String::as_str);
                sections.push(self.type_list("possible types", links));
            }
            _ => {}
        }

        let (deprecated, current): (Vec<&FieldDef>, Vec<&FieldDef>) =
            type_def.fields.iter().partition(|f| f.is_deprecated);
        if !current.is_empty() {
            let items = current.iter().map(|f| self.field_item(type_def, f)).collect();
            sections.push(self.category("fields", items));
        }
        if self.config.show_deprecated && !deprecated.is_empty() {
            let items = deprecated.iter().map(|f| self.field_item(type_def, f)).collect();
            sections.push(self.category("deprecated fields", items));
        }

        let (deprecated, current): (Vec<&EnumValueDef>, Vec<&EnumValueDef>) =
            type_def.enum_values.iter().partition(|v| v.is_deprecated);
        if !current.is_empty() {
            let items = current.iter().map(|v| self.enum_value_item(v)).collect();
            sections.push(self.category("values", items));
        }
        if self.config.show_deprecated && !deprecated.is_empty() {
            let items = deprecated.iter().map(|v| self.enum_value_item(v)).collect();
            sections.push(self.category("deprecated values", items));
        }

        Fragment::block(None, sections)
    }

    fn type_list<'a>(&self, title: &str, names: impl Iterator<Item = &'a str>) -> Fragment {
        let items = names
            .map(|name| self.category_item(name, vec![Fragment::link(class::TYPE_NAME, name, name)]))
            .collect();
        self.category(title, items)
    }

    /// `name(arg: T, ...): Type = default`, then description and deprecation.
    fn field_item(&self, owner: &TypeDef, field: &FieldDef) -> Fragment {
        let coordinate = format!("{}.{}", owner.name, field.name);
        let mut signature = vec![Fragment::link(class::FIELD_NAME, coordinate, &field.name)];

        if !field.args.is_empty() {
            signature.push(Fragment::text("("));
            for (i, arg) in field.args.iter().enumerate() {
                if i > 0 {
                    signature.push(Fragment::text(", "));
                }
                signature.push(self.argument(arg));
            }
            signature.push(Fragment::text(")"));
        }
        signature.push(Fragment::text(": "));
        signature.push(self.type_link(&field.type_ref));
        signature.push(self.default_value(field.default_value.as_deref()));

        let mut children = vec![Fragment::inline(None, signature)];
        if let Some(description) = &field.description {
            children.push(Fragment::markdown(class::FIELD_SHORT_DESCRIPTION, description));
        }
        if let Some(reason) = &field.deprecation_reason {
            children.push(Fragment::markdown(class::DOC_DEPRECATION, reason));
        }
        self.category_item(&field.name, children)
    }

    fn enum_value_item(&self, value: &EnumValueDef) -> Fragment {
        let mut children = vec![Fragment::inline(
            Some(class::ENUM_VALUE),
            vec![Fragment::text(&value.name)],
        )];
        if let Some(description) = &value.description {
            children.push(Fragment::markdown(class::DOC_VALUE_DESCRIPTION, description));
        }
        if let Some(reason) = &value.deprecation_reason {
            children.push(Fragment::markdown(class::DOC_DEPRECATION, reason));
        }
        self.category_item(&value.name, children)
    }
}
