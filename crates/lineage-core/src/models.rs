// Rust guideline compliant 2026-02-06

//! Core data models for Lineage.
//!
//! Records live in an arena owned by [`GedcomTree`](crate::GedcomTree) and are
//! addressed by [`RecordId`]. Parent/child ownership in the tree and the
//! relationship edges between individuals are both expressed as ids, so the
//! spouse/parent graph can contain cycles without any reference cycles.

use serde::Serialize;
use std::collections::HashMap;

/// Tag of individual records.
pub const INDIVIDUAL_TAG: &str = "INDI";
/// Tag of family records.
pub const FAMILY_TAG: &str = "FAM";
/// Family member tag for the husband.
pub const HUSBAND_TAG: &str = "HUSB";
/// Family member tag for the wife.
pub const WIFE_TAG: &str = "WIFE";
/// Family member tag for a child.
pub const CHILD_TAG: &str = "CHIL";
/// Personal name sub-record.
pub const NAME_TAG: &str = "NAME";
/// Birth event sub-record.
pub const BIRTH_TAG: &str = "BIRT";
/// Death event sub-record.
pub const DEATH_TAG: &str = "DEAT";
/// Place sub-record.
pub const PLACE_TAG: &str = "PLAC";
/// Tag of the synthetic root.
pub const ROOT_TAG: &str = "ROOT";

/// Level of the synthetic root. Real records start at 0.
pub const ROOT_LEVEL: i32 = -1;

/// Handle to a record inside a [`GedcomTree`](crate::GedcomTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    /// Position of the record in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Returns true if the token has the `@IDENT@` cross-reference shape.
pub fn is_reference(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('@') && token.ends_with('@')
}

/// Extracts the surname from a `Given /Surname/` name payload.
///
/// Only names whose last character is the closing slash carry a surname;
/// anything else yields an empty string.
pub fn extract_surname(full_name: &str) -> String {
    let trimmed = full_name.trim();
    trimmed
        .strip_suffix('/')
        .and_then(|body| body.find('/').map(|start| body[start + 1..].to_string()))
        .unwrap_or_default()
}

/// Relationship edges and derived fields of an individual.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Individual {
    parents: Vec<RecordId>,
    children: Vec<RecordId>,
    spouses: Vec<RecordId>,
    families: Vec<RecordId>,
    surname: String,
    full_name: String,
}

impl Individual {
    /// Resolved parents, in family input order.
    pub fn parents(&self) -> &[RecordId] {
        &self.parents
    }

    /// Resolved children across all families.
    pub fn children(&self) -> &[RecordId] {
        &self.children
    }

    /// Resolved spouses; never contains the individual itself.
    pub fn spouses(&self) -> &[RecordId] {
        &self.spouses
    }

    /// Families this individual is a member of, in any role.
    pub fn families(&self) -> &[RecordId] {
        &self.families
    }

    /// Surname taken from the first `NAME` sub-record, or empty.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Raw payload of the first `NAME` sub-record, or empty.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub(crate) fn add_family(&mut self, family: RecordId) {
        self.families.push(family);
    }

    pub(crate) fn add_parents(&mut self, parents: &[RecordId]) {
        self.parents.extend_from_slice(parents);
    }

    pub(crate) fn add_children(&mut self, children: &[RecordId]) {
        self.children.extend_from_slice(children);
    }

    /// Adds every spouse except `me`.
    pub(crate) fn add_spouses(&mut self, me: RecordId, spouses: &[RecordId]) {
        self.spouses
            .extend(spouses.iter().copied().filter(|&spouse| spouse != me));
    }

    pub(crate) fn set_names(&mut self, full_name: &str) {
        self.full_name = full_name.to_string();
        self.surname = extract_surname(full_name);
    }
}

/// Variant of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// Any record without specialised fields.
    Plain,
    /// An `INDI` record declared with a reference.
    Individual(Individual),
}

/// A single node of the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    level: i32,
    tag: String,
    reference: Option<String>,
    data: Option<String>,
    /// All children in input order.
    children: Vec<RecordId>,
    /// Children grouped by tag, each group in input order.
    by_tag: HashMap<String, Vec<RecordId>>,
    kind: RecordKind,
}

impl Record {
    /// Creates a plain record without children.
    pub fn new(
        level: i32,
        tag: impl Into<String>,
        reference: Option<String>,
        data: Option<String>,
    ) -> Self {
        Self {
            level,
            tag: tag.into(),
            reference,
            data,
            children: Vec::new(),
            by_tag: HashMap::new(),
            kind: RecordKind::Plain,
        }
    }

    /// Creates an individual record without children or edges.
    pub fn individual(
        level: i32,
        tag: impl Into<String>,
        reference: Option<String>,
        data: Option<String>,
    ) -> Self {
        Self {
            kind: RecordKind::Individual(Individual::default()),
            ..Self::new(level, tag, reference, data)
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(ROOT_LEVEL, ROOT_TAG, None, None)
    }

    /// Nesting level; `-1` only for the synthetic root.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Record tag, e.g. `INDI` or `PLAC`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Cross-reference token carried by this line, if any.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Free-text payload, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// All children in input order.
    pub fn children(&self) -> &[RecordId] {
        &self.children
    }

    /// Children with the given tag, in input order. Empty if there are none.
    pub fn children_with_tag(&self, tag: &str) -> &[RecordId] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First child with the given tag.
    pub fn first_child_with_tag(&self, tag: &str) -> Option<RecordId> {
        self.children_with_tag(tag).first().copied()
    }

    /// The record variant.
    pub fn kind(&self) -> &RecordKind {
        &self.kind
    }

    /// Returns true for individual records.
    pub fn is_individual(&self) -> bool {
        matches!(self.kind, RecordKind::Individual(_))
    }

    /// Individual fields, or `None` for plain records.
    pub fn as_individual(&self) -> Option<&Individual> {
        match &self.kind {
            RecordKind::Individual(individual) => Some(individual),
            RecordKind::Plain => None,
        }
    }

    pub(crate) fn as_individual_mut(&mut self) -> Option<&mut Individual> {
        match &mut self.kind {
            RecordKind::Individual(individual) => Some(individual),
            RecordKind::Plain => None,
        }
    }

    pub(crate) fn push_child(&mut self, tag: &str, child: RecordId) {
        self.children.push(child);
        self.by_tag.entry(tag.to_string()).or_default().push(child);
    }
}
