// Rust guideline compliant 2026-02-06

//! Implementation of the `lineage print` command.
//!
//! Reprints the parsed tree in the line format. The output is always the
//! GEDCOM text, whatever output format is selected.

use super::CommandContext;
use anyhow::Result;
use lineage_core::Genealogy;
use std::path::Path;

/// Renders the document back to GEDCOM text.
pub fn render(doc: &Genealogy) -> String {
    doc.to_gedcom_string()
}

/// Prints a parsed file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub fn execute(path: &Path, ctx: &CommandContext<'_>) -> Result<()> {
    let doc = super::load(path)?;
    ctx.emit(&doc, &render(&doc));
    Ok(())
}
