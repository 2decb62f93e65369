// Rust guideline compliant 2026-02-06

//! Command implementations for the Lineage CLI.
//!
//! Every command loads one document, renders its output into a string and
//! prints it through [`CommandContext::emit`].

pub mod check;
pub mod individuals;
pub mod lineage;
pub mod print;
pub mod roots;
pub mod show;

use crate::OutputFormatter;
use anyhow::{Context, Result};
use lineage_core::Genealogy;
use std::path::Path;
use tracing::info;

/// Settings shared by all commands.
pub struct CommandContext<'a> {
    /// Formatter selected by flags or configuration.
    pub formatter: &'a dyn OutputFormatter,
    /// Whether skipped family members are listed after the output.
    pub report_unresolved: bool,
}

impl CommandContext<'_> {
    /// Prints command output, followed by the unresolved members of `doc`
    /// when reporting is enabled.
    pub fn emit(&self, doc: &Genealogy, output: &str) {
        println!("{}", output.trim_end_matches('\n'));
        if self.report_unresolved && !doc.report().is_clean() {
            eprintln!(
                "{}",
                self.formatter.format_unresolved(&doc.report().unresolved)
            );
        }
    }
}

/// Parses and links a GEDCOM file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn load(path: &Path) -> Result<Genealogy> {
    let doc = Genealogy::from_path(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    info!(
        path = %path.display(),
        individuals = doc.individuals().len(),
        families = doc.families().len(),
        "loaded document"
    );
    Ok(doc)
}
