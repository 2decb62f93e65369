// Rust guideline compliant 2026-02-06

//! Implementation of the `lineage check` command.
//!
//! Reports family members that could not be linked, reference ids declared
//! more than once, and ancestry cycles.

use super::CommandContext;
use anyhow::Result;
use lineage_core::{Genealogy, UnresolvedReference};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Result of checking one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Number of individual records.
    pub individuals: usize,
    /// Number of family records.
    pub families: usize,
    /// Member lines that resolved to individuals.
    pub linked_members: usize,
    /// Member lines that were skipped.
    pub unresolved: Vec<UnresolvedReference>,
    /// Reference ids declared more than once.
    pub duplicates: Vec<String>,
    /// References on one ancestry cycle, if any exists.
    pub cycle: Option<Vec<String>>,
}

impl CheckReport {
    /// Collects the problems of a linked document.
    pub fn from_document(doc: &Genealogy) -> Self {
        Self {
            individuals: doc.individuals().len(),
            families: doc.families().len(),
            linked_members: doc.report().linked_members,
            unresolved: doc.report().unresolved.clone(),
            duplicates: doc.index().duplicates().to_vec(),
            cycle: doc.lineage_graph().find_cycle(),
        }
    }

    /// Returns true if no problem was found.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty() && self.duplicates.is_empty() && self.cycle.is_none()
    }
}

/// Checks a file and prints the report.
///
/// # Returns
///
/// `true` if the document has no problems.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub fn execute(path: &Path, ctx: &CommandContext<'_>) -> Result<bool> {
    let doc = super::load(path)?;
    let report = CheckReport::from_document(&doc);
    if let Some(cycle) = &report.cycle {
        warn!(?cycle, "ancestry cycle detected");
    }
    println!(
        "{}",
        ctx.formatter.format_check(&report).trim_end_matches('\n')
    );
    Ok(report.is_clean())
}
