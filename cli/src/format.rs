//! Output formatting.

use graphdoc_constraint::Violations;
use graphdoc_render::Fragment;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Write a page in the selected format.
pub fn format_fragment(fragment: &Fragment, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => fragment.to_text(),
        OutputFormat::Html => fragment.to_html(),
        OutputFormat::Json => fragment.to_json()?,
    })
}

/// One violation per line, then a summary.
pub fn format_violations(violations: &Violations) -> String {
    if violations.is_empty() {
        return "No constraint violations".to_string();
    }

    let mut output = String::new();
    for violation in violations.all() {
        output.push_str(&violation.to_string());
        output.push('\n');
    }
    output.push_str(&format!(
        "\n({} errors, {} warnings)",
        violations.errors().count(),
        violations.warnings().count()
    ));
    output
}
