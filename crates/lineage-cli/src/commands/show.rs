// Rust guideline compliant 2026-02-06

//! Implementation of the `lineage show` command.
//!
//! Displays one individual with their parents, spouses, children and
//! families.

use super::CommandContext;
use crate::OutputFormatter;
use anyhow::{anyhow, Result};
use lineage_core::models::is_reference;
use lineage_core::Genealogy;
use std::path::Path;

/// Renders one individual.
///
/// # Arguments
///
/// * `doc` - The loaded document
/// * `reference` - Reference id such as `@I1@`; the `@` delimiters may be
///   omitted
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the reference is unknown or names a non-individual.
pub fn render(doc: &Genealogy, reference: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let id = doc.individual(&normalize_reference(reference))?;
    let summary = doc
        .summary(id)
        .ok_or_else(|| anyhow!("{} is not an individual", reference))?;
    Ok(formatter.format_individual(&summary))
}

/// Shows an individual of a file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the reference does not
/// name an individual.
pub fn execute(path: &Path, reference: &str, ctx: &CommandContext<'_>) -> Result<()> {
    let doc = super::load(path)?;
    let output = render(&doc, reference, ctx.formatter)?;
    ctx.emit(&doc, &output);
    Ok(())
}

/// Wraps a bare id such as `I1` as `@I1@`.
pub fn normalize_reference(reference: &str) -> String {
    let trimmed = reference.trim();
    if is_reference(trimmed) {
        trimmed.to_string()
    } else {
        format!("@{}@", trimmed.trim_matches('@'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_reference() {
        assert_eq!(normalize_reference("@I1@"), "@I1@");
        assert_eq!(normalize_reference("I1"), "@I1@");
        assert_eq!(normalize_reference(" @I1"), "@I1@");
        assert_eq!(normalize_reference("@"), "@@");
        assert_eq!(normalize_reference("@@"), "@@");
    }
}
