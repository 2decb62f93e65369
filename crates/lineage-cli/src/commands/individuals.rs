// Rust guideline compliant 2026-02-06

//! Implementation of the `lineage individuals` command.

use super::CommandContext;
use crate::OutputFormatter;
use anyhow::Result;
use lineage_core::Genealogy;
use std::path::Path;

/// Renders every individual of the document, in input order.
pub fn render(doc: &Genealogy, formatter: &dyn OutputFormatter) -> String {
    formatter.format_list(&doc.summaries())
}

/// Lists the individuals of a file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub fn execute(path: &Path, ctx: &CommandContext<'_>) -> Result<()> {
    let doc = super::load(path)?;
    ctx.emit(&doc, &render(&doc, ctx.formatter));
    Ok(())
}
