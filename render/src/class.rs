//! Semantic class markers.
//!
//! Stylesheets and tests key off these names; they must not change.

pub const CONSTRAINT: &str = "constraint";
pub const CONSTRAINT_NAME: &str = "constraint-name";
pub const CONSTRAINT_SIDE: &str = "constraint-side";

pub const DOC_CATEGORY: &str = "doc-category";
pub const DOC_CATEGORY_TITLE: &str = "doc-category-title";
pub const DOC_CATEGORY_ITEM: &str = "doc-category-item";

pub const DOC_TYPE_DESCRIPTION: &str = "doc-type-description";
pub const DOC_DEPRECATION: &str = "doc-deprecation";
pub const DOC_VALUE_DESCRIPTION: &str = "doc-value-description";
pub const FIELD_SHORT_DESCRIPTION: &str = "field-short-description";

pub const TYPE_NAME: &str = "type-name";
pub const FIELD_NAME: &str = "field-name";
pub const ARG: &str = "arg";
pub const ARG_NAME: &str = "arg-name";
pub const ARG_DEFAULT_VALUE: &str = "arg-default-value";
pub const ENUM_VALUE: &str = "enum-value";
pub const KEYWORD: &str = "keyword";
