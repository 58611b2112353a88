//! graphdoc Render
//!
//! Turns schema metadata into a tree of display fragments.
//!
//! Responsibilities:
//! - Render constraint expressions as `NAME(left, right)` with a depth ceiling
//! - Render field, type and schema documentation pages
//! - Keep the semantic class markers stable for styling and tests
//! - Write fragment trees as plain text, HTML or JSON
//!
//! Every render is a pure function of its input; nothing here mutates the
//! schema.

pub mod class;
mod config;
mod constraint;
mod error;
mod field_doc;
mod fragment;
mod output;
mod renderer;
mod schema_doc;
mod type_doc;
mod type_link;

pub use config::{ConfigError, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use field_doc::FieldDocView;
pub use fragment::{Element, Fragment, Markdown, Tag};
pub use renderer::DocRenderer;
