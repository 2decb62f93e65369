// Rust guideline compliant 2026-02-06

//! Reference index over a parsed tree.
//!
//! Maps each cross-reference id declared by a level-0 record to that record.
//! Records that merely point at an id (`1 HUSB @I1@`) are not indexed.

use crate::models::{is_reference, RecordId};
use crate::tree::GedcomTree;
use std::collections::HashMap;
use tracing::warn;

/// Outcome of resolving a pointer to an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The pointer names an individual.
    Individual(RecordId),
    /// The pointer names a record that is not an individual.
    WrongKind(RecordId),
    /// No record declares the pointer.
    Missing,
    /// The value does not have the `@IDENT@` shape.
    NotAReference,
}

/// Index from reference id to the level-0 record declaring it.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    /// Mapping from reference id to record.
    map: HashMap<String, RecordId>,
    /// Ids declared more than once; the first declaration is kept.
    duplicates: Vec<String>,
}

impl ReferenceIndex {
    /// Builds the index in one pass over the root's children.
    ///
    /// # Arguments
    ///
    /// * `tree` - A completed tree
    ///
    /// # Returns
    ///
    /// The index. Duplicate declarations are logged and recorded, not fatal.
    pub fn build(tree: &GedcomTree) -> Self {
        let root = tree.get(tree.root());
        let mut index = Self {
            map: HashMap::with_capacity(root.children().len()),
            duplicates: Vec::new(),
        };

        for &id in root.children() {
            if let Some(reference) = tree.get(id).reference() {
                index.insert(reference, id);
            }
        }

        index
    }

    fn insert(&mut self, reference: &str, id: RecordId) {
        if self.map.contains_key(reference) {
            warn!(reference, "duplicate reference id, keeping first declaration");
            self.duplicates.push(reference.to_string());
        } else {
            self.map.insert(reference.to_string(), id);
        }
    }

    /// Looks up the record declaring `reference`.
    ///
    /// # Returns
    ///
    /// The record if found, None otherwise.
    pub fn resolve(&self, reference: &str) -> Option<RecordId> {
        self.map.get(reference).copied()
    }

    /// Resolves a pointer value and checks that it names an individual.
    pub fn resolve_individual(&self, tree: &GedcomTree, pointer: &str) -> Resolution {
        if !is_reference(pointer) {
            return Resolution::NotAReference;
        }
        match self.resolve(pointer) {
            Some(id) if tree.get(id).is_individual() => Resolution::Individual(id),
            Some(id) => Resolution::WrongKind(id),
            None => Resolution::Missing,
        }
    }

    /// Ids that were declared more than once.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Returns the number of indexed ids.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_from_str;

    const DOC: &str = "0 @I1@ INDI\n1 NAME A /B/\n0 @F1@ FAM\n1 HUSB @I1@\n0 @I1@ INDI";

    #[test]
    fn test_indexes_level_zero_only() {
        let tree = build_from_str(DOC).unwrap();
        let index = ReferenceIndex::build(&tree);
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("@I1@"), Some(tree.individuals()[0]));
        assert_eq!(index.resolve("@F1@"), Some(tree.families()[0]));
        assert_eq!(index.resolve("@X9@"), None);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let tree = build_from_str(DOC).unwrap();
        let index = ReferenceIndex::build(&tree);
        assert_eq!(index.duplicates(), &["@I1@".to_string()]);
        assert_eq!(index.resolve("@I1@"), Some(tree.individuals()[0]));
    }

    #[test]
    fn test_resolve_individual_outcomes() {
        let tree = build_from_str(DOC).unwrap();
        let index = ReferenceIndex::build(&tree);
        assert_eq!(
            index.resolve_individual(&tree, "@I1@"),
            Resolution::Individual(tree.individuals()[0])
        );
        assert_eq!(
            index.resolve_individual(&tree, "@F1@"),
            Resolution::WrongKind(tree.families()[0])
        );
        assert_eq!(index.resolve_individual(&tree, "@I2@"), Resolution::Missing);
        assert_eq!(
            index.resolve_individual(&tree, "I1"),
            Resolution::NotAReference
        );
    }
}
