// Rust guideline compliant 2026-02-06

//! Record arena and derived queries.
//!
//! [`GedcomTree`] owns every record of one parsed document. Index 0 is always
//! the synthetic root at level `-1`; every level-0 record is one of its
//! children.

use crate::models::{
    Individual, Record, RecordId, BIRTH_TAG, DEATH_TAG, FAMILY_TAG, INDIVIDUAL_TAG, NAME_TAG,
    PLACE_TAG,
};
use std::collections::HashSet;

/// Arena of records forming one parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomTree {
    records: Vec<Record>,
}

impl Default for GedcomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GedcomTree {
    /// Creates a tree holding only the synthetic root.
    pub fn new() -> Self {
        Self {
            records: vec![Record::root()],
        }
    }

    /// The synthetic root.
    pub fn root(&self) -> RecordId {
        RecordId(0)
    }

    /// Returns the record for an id handed out by this tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another tree and is out of range.
    pub fn get(&self, id: RecordId) -> &Record {
        &self.records[id.0]
    }

    /// Returns the record for an id, or `None` if out of range.
    pub fn try_get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.0)
    }

    /// Number of records, root excluded.
    pub fn len(&self) -> usize {
        self.records.len() - 1
    }

    /// Returns true if nothing but the root exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Level-0 records with the given tag, in input order.
    pub fn top_level(&self, tag: &str) -> &[RecordId] {
        self.get(self.root()).children_with_tag(tag)
    }

    /// All individual records, in input order.
    pub fn individuals(&self) -> &[RecordId] {
        self.top_level(INDIVIDUAL_TAG)
    }

    /// All family records, in input order.
    pub fn families(&self) -> &[RecordId] {
        self.top_level(FAMILY_TAG)
    }

    /// Individual fields of the record, if it is an individual.
    pub fn individual(&self, id: RecordId) -> Option<&Individual> {
        self.try_get(id).and_then(Record::as_individual)
    }

    /// Iterates over every record except the root, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, record)| (RecordId(index), record))
    }

    pub(crate) fn insert(&mut self, record: Record) -> RecordId {
        self.records.push(record);
        RecordId(self.records.len() - 1)
    }

    pub(crate) fn attach(&mut self, parent: RecordId, child: RecordId) {
        let tag = self.records[child.0].tag().to_string();
        self.records[parent.0].push_child(&tag, child);
    }

    pub(crate) fn individual_mut(&mut self, id: RecordId) -> Option<&mut Individual> {
        self.records
            .get_mut(id.0)
            .and_then(Record::as_individual_mut)
    }

    /// Computes derived fields once the record's subtree is complete.
    pub(crate) fn finalize(&mut self, id: RecordId) {
        if !self.get(id).is_individual() {
            return;
        }
        let full_name = self
            .get(id)
            .first_child_with_tag(NAME_TAG)
            .and_then(|name| self.get(name).data())
            .unwrap_or_default()
            .to_string();
        if let Some(individual) = self.individual_mut(id) {
            individual.set_names(&full_name);
        }
    }
}

impl GedcomTree {
    /// Walks up through parents sharing the individual's surname.
    ///
    /// Returns the earliest such ancestor, or `id` itself when no parent
    /// shares the surname. Corrupt data where someone is their own ancestor
    /// stops at the first repeated individual.
    pub fn surname_root(&self, id: RecordId) -> RecordId {
        let mut current = id;
        let mut visited = HashSet::from([id]);

        while let Some(individual) = self.individual(current) {
            let surname = individual.surname();
            let next = individual.parents().iter().copied().find(|parent| {
                !visited.contains(parent)
                    && self
                        .individual(*parent)
                        .is_some_and(|p| p.surname() == surname)
            });

            match next {
                Some(parent) => {
                    visited.insert(parent);
                    current = parent;
                }
                None => break,
            }
        }

        current
    }

    /// Distinct surname roots of all individuals, in first-seen order.
    pub fn surname_roots(&self) -> Vec<RecordId> {
        let mut seen = HashSet::new();
        self.individuals()
            .iter()
            .map(|&id| self.surname_root(id))
            .filter(|root| seen.insert(*root))
            .collect()
    }

    /// Picks one place to show for an individual.
    ///
    /// Tries the birth place, then the death place, then the first `PLAC`
    /// directly under the record.
    pub fn representative_location(&self, id: RecordId) -> Option<&str> {
        self.event_place(id, BIRTH_TAG)
            .or_else(|| self.event_place(id, DEATH_TAG))
            .or_else(|| self.place_of(id))
    }

    fn event_place(&self, id: RecordId, event_tag: &str) -> Option<&str> {
        self.get(id)
            .children_with_tag(event_tag)
            .iter()
            .find_map(|&event| self.place_of(event))
    }

    fn place_of(&self, id: RecordId) -> Option<&str> {
        self.get(id)
            .children_with_tag(PLACE_TAG)
            .iter()
            .find_map(|&place| self.get(place).data())
    }
}
