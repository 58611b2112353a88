//! graphdoc CLI library - browse GraphQL schema documentation from a terminal.
//!
//! - `config`: explorer configuration loaded from TOML
//! - `explorer`: schema loading and page rendering
//! - `format`: writing pages and violations in the selected output format
//! - `error`: CLI error type

mod config;
mod error;
mod explorer;
mod format;

pub use config::{ExplorerConfig, OutputFormat};
pub use error::{CliError, CliResult};
pub use explorer::Explorer;
pub use format::{format_fragment, format_violations};
