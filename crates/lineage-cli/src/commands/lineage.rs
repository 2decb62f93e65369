// Rust guideline compliant 2026-02-06

//! Implementation of the `lineage ancestors` and `lineage descendants`
//! commands.

use super::show::normalize_reference;
use super::CommandContext;
use crate::OutputFormatter;
use anyhow::Result;
use lineage_core::Genealogy;
use std::path::Path;

/// Which way to walk the parent-to-child graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Parents, grandparents and so on.
    Ancestors,
    /// Children, grandchildren and so on.
    Descendants,
}

/// Renders everyone reachable from `reference`, nearest generation first.
///
/// # Errors
///
/// Returns an error if the reference does not name an individual.
pub fn render(
    doc: &Genealogy,
    reference: &str,
    direction: Direction,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let id = doc.individual(&normalize_reference(reference))?;
    let graph = doc.lineage_graph();
    let related = match direction {
        Direction::Ancestors => graph.ancestors(id)?,
        Direction::Descendants => graph.descendants(id)?,
    };

    let summaries: Vec<_> = related
        .into_iter()
        .filter_map(|other| doc.summary(other))
        .collect();
    Ok(formatter.format_list(&summaries))
}

/// Lists the ancestors or descendants of an individual in a file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the reference does not
/// name an individual.
pub fn execute(
    path: &Path,
    reference: &str,
    direction: Direction,
    ctx: &CommandContext<'_>,
) -> Result<()> {
    let doc = super::load(path)?;
    let output = render(&doc, reference, direction, ctx.formatter)?;
    ctx.emit(&doc, &output);
    Ok(())
}
