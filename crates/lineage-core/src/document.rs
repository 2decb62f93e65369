// Rust guideline compliant 2026-02-06

//! Parsed and linked genealogy document.

use crate::graph::LineageGraph;
use crate::linker::{link, LinkReport};
use crate::models::{Record, RecordId};
use crate::resolver::ReferenceIndex;
use crate::summary::IndividualSummary;
use crate::tree::GedcomTree;
use crate::{source, writer, Error, Result};
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

/// A document that has been parsed, indexed and linked.
///
/// Each instance owns its own tree and index; nothing is shared between
/// documents.
#[derive(Debug, Clone)]
pub struct Genealogy {
    tree: GedcomTree,
    index: ReferenceIndex,
    report: LinkReport,
}

impl Genealogy {
    /// Parses and links a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be read and
    /// [`Error::MalformedLine`] if its structure is corrupt.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_tree(source::parse_path(path)?))
    }

    /// Parses and links the lines of a reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails and [`Error::MalformedLine`] if
    /// the structure is corrupt.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::from_tree(source::parse_reader(reader)?))
    }

    /// Indexes and links an already built tree.
    pub fn from_tree(mut tree: GedcomTree) -> Self {
        let index = ReferenceIndex::build(&tree);
        let report = link(&mut tree, &index);
        Self {
            tree,
            index,
            report,
        }
    }

    /// The record arena.
    pub fn tree(&self) -> &GedcomTree {
        &self.tree
    }

    /// The reference index used for linking.
    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    /// Outcome of the linking pass.
    pub fn report(&self) -> &LinkReport {
        &self.report
    }

    /// The synthetic root.
    pub fn root(&self) -> RecordId {
        self.tree.root()
    }

    /// Returns a record by id.
    pub fn record(&self, id: RecordId) -> &Record {
        self.tree.get(id)
    }

    /// Level-0 records with the given tag.
    pub fn get_nodes(&self, tag: &str) -> &[RecordId] {
        self.tree.top_level(tag)
    }

    /// All individuals, in input order.
    pub fn individuals(&self) -> &[RecordId] {
        self.tree.individuals()
    }

    /// All families, in input order.
    pub fn families(&self) -> &[RecordId] {
        self.tree.families()
    }

    /// Looks up an individual by reference id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if nothing declares the reference and
    /// [`Error::NotAnIndividual`] if it names another kind of record.
    pub fn individual(&self, reference: &str) -> Result<RecordId> {
        let id = self
            .index
            .resolve(reference)
            .ok_or_else(|| Error::NotFound(reference.to_string()))?;
        if self.tree.get(id).is_individual() {
            Ok(id)
        } else {
            Err(Error::NotAnIndividual(reference.to_string()))
        }
    }

    /// Summary of an individual, or `None` for other records.
    pub fn summary(&self, id: RecordId) -> Option<IndividualSummary> {
        IndividualSummary::from_tree(&self.tree, id)
    }

    /// Summaries of all individuals, in input order.
    pub fn summaries(&self) -> Vec<IndividualSummary> {
        self.individuals()
            .iter()
            .filter_map(|&id| self.summary(id))
            .collect()
    }

    /// See [`GedcomTree::surname_root`].
    pub fn surname_root(&self, id: RecordId) -> RecordId {
        self.tree.surname_root(id)
    }

    /// See [`GedcomTree::surname_roots`].
    pub fn surname_roots(&self) -> Vec<RecordId> {
        self.tree.surname_roots()
    }

    /// See [`GedcomTree::representative_location`].
    pub fn representative_location(&self, id: RecordId) -> Option<&str> {
        self.tree.representative_location(id)
    }

    /// Builds the parent-to-child graph of all individuals.
    pub fn lineage_graph(&self) -> LineageGraph {
        LineageGraph::from_tree(&self.tree)
    }

    /// Prints the document back in the line format.
    pub fn to_gedcom_string(&self) -> String {
        writer::to_gedcom_string(&self.tree)
    }
}

impl FromStr for Genealogy {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(Self::from_tree(source::parse_str(text)?))
    }
}

impl fmt::Display for Genealogy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_gedcom_string())
    }
}
