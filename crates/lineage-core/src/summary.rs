// Rust guideline compliant 2026-02-06

//! Serializable views of individuals.

use crate::models::RecordId;
use crate::tree::GedcomTree;
use serde::Serialize;

/// Flattened view of one linked individual, with relations as reference ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualSummary {
    /// Reference id, e.g. `@I1@`.
    pub reference: String,
    /// Raw name payload.
    pub full_name: String,
    /// Surname, empty if none.
    pub surname: String,
    /// Representative location, if any.
    pub location: Option<String>,
    /// Parent references.
    pub parents: Vec<String>,
    /// Spouse references.
    pub spouses: Vec<String>,
    /// Child references.
    pub children: Vec<String>,
    /// Family references.
    pub families: Vec<String>,
}

impl IndividualSummary {
    /// Builds the summary, or `None` if `id` is not an individual.
    pub fn from_tree(tree: &GedcomTree, id: RecordId) -> Option<Self> {
        let individual = tree.individual(id)?;
        let references = |ids: &[RecordId]| -> Vec<String> {
            ids.iter()
                .filter_map(|&other| tree.get(other).reference())
                .map(str::to_string)
                .collect()
        };

        Some(Self {
            reference: tree.get(id).reference().unwrap_or_default().to_string(),
            full_name: individual.full_name().to_string(),
            surname: individual.surname().to_string(),
            location: tree.representative_location(id).map(str::to_string),
            parents: references(individual.parents()),
            spouses: references(individual.spouses()),
            children: references(individual.children()),
            families: references(individual.families()),
        })
    }

    /// Name for display: the full name without surname slashes.
    pub fn display_name(&self) -> String {
        let name = self.full_name.replace('/', "");
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            self.reference.clone()
        } else {
            name
        }
    }
}
