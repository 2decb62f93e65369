// Rust guideline compliant 2026-02-06

//! Implementation of the `lineage roots` command.
//!
//! Lists the surname roots of a document: the earliest known ancestor of
//! each surname line.

use super::CommandContext;
use crate::OutputFormatter;
use anyhow::Result;
use lineage_core::Genealogy;
use std::path::Path;

/// Renders the distinct surname roots, in first-seen order.
pub fn render(doc: &Genealogy, formatter: &dyn OutputFormatter) -> String {
    let roots: Vec<_> = doc
        .surname_roots()
        .into_iter()
        .filter_map(|id| doc.summary(id))
        .collect();
    formatter.format_list(&roots)
}

/// Lists the surname roots of a file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub fn execute(path: &Path, ctx: &CommandContext<'_>) -> Result<()> {
    let doc = super::load(path)?;
    ctx.emit(&doc, &render(&doc, ctx.formatter));
    Ok(())
}
