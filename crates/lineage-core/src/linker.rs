// Rust guideline compliant 2026-02-06

//! Family linking.
//!
//! Walks every `FAM` record once, resolves its `HUSB`, `WIFE` and `CHIL`
//! pointers through the [`ReferenceIndex`], and records parent, child,
//! spouse and family edges on the individuals involved. Members that do not
//! resolve to an individual are skipped and reported, never fatal.
//!
//! Linking is meant to run exactly once per tree; a second run duplicates
//! every edge.

use crate::models::{RecordId, CHILD_TAG, HUSBAND_TAG, WIFE_TAG};
use crate::resolver::{ReferenceIndex, Resolution};
use crate::tree::GedcomTree;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Role of a member line inside a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// `HUSB` line.
    Husband,
    /// `WIFE` line.
    Wife,
    /// `CHIL` line.
    Child,
}

impl MemberRole {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            HUSBAND_TAG => Some(Self::Husband),
            WIFE_TAG => Some(Self::Wife),
            CHILD_TAG => Some(Self::Child),
            _ => None,
        }
    }

    /// Returns the tag this role is read from.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Husband => HUSBAND_TAG,
            Self::Wife => WIFE_TAG,
            Self::Child => CHILD_TAG,
        }
    }

    fn is_parent(self) -> bool {
        matches!(self, Self::Husband | Self::Wife)
    }
}

/// Why a family member was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The member line carries no `@IDENT@` pointer.
    NotAReference,
    /// No record declares the pointer.
    Missing,
    /// The pointer names a record that is not an individual.
    NotAnIndividual,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotAReference => "not a reference",
            Self::Missing => "no such record",
            Self::NotAnIndividual => "not an individual",
        };
        f.write_str(text)
    }
}

/// A family member that contributed no edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// Reference id of the family, if it declared one.
    pub family: Option<String>,
    /// Member role of the skipped line.
    pub role: MemberRole,
    /// Raw value of the member line.
    pub reference: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.family.as_deref().unwrap_or("<unnamed family>"),
            self.role.tag(),
            self.reference,
            self.reason
        )
    }
}

/// Summary of one linking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Number of family records visited.
    pub families: usize,
    /// Number of member lines resolved to individuals.
    pub linked_members: usize,
    /// Member lines that were skipped.
    pub unresolved: Vec<UnresolvedReference>,
}

impl LinkReport {
    /// Returns true if every member line resolved.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Links all families of `tree` using `index`.
///
/// # Arguments
///
/// * `tree` - The parsed tree; individuals are mutated in place
/// * `index` - Reference index built over the same tree
///
/// # Returns
///
/// A report listing the skipped members.
pub fn link(tree: &mut GedcomTree, index: &ReferenceIndex) -> LinkReport {
    let mut report = LinkReport::default();
    let families = tree.families().to_vec();

    for family in families {
        report.families += 1;
        let (parents, offspring) = collect_members(tree, index, family, &mut report);
        report.linked_members += parents.len() + offspring.len();

        for &parent in &parents {
            if let Some(individual) = tree.individual_mut(parent) {
                individual.add_family(family);
                individual.add_children(&offspring);
                individual.add_spouses(parent, &parents);
            }
        }

        for &child in &offspring {
            if let Some(individual) = tree.individual_mut(child) {
                individual.add_family(family);
                individual.add_parents(&parents);
            }
        }
    }

    debug!(
        families = report.families,
        linked = report.linked_members,
        skipped = report.unresolved.len(),
        "linked families"
    );
    report
}

/// Resolves the members of one family into parents and offspring.
fn collect_members(
    tree: &GedcomTree,
    index: &ReferenceIndex,
    family: RecordId,
    report: &mut LinkReport,
) -> (Vec<RecordId>, Vec<RecordId>) {
    let mut parents = Vec::new();
    let mut offspring = Vec::new();
    let family_record = tree.get(family);

    for &member in family_record.children() {
        let record = tree.get(member);
        let Some(role) = MemberRole::from_tag(record.tag()) else {
            continue;
        };
        let pointer = record.data().unwrap_or_default();

        let reason = match index.resolve_individual(tree, pointer) {
            Resolution::Individual(id) => {
                if role.is_parent() {
                    parents.push(id);
                } else {
                    offspring.push(id);
                }
                continue;
            }
            Resolution::WrongKind(_) => SkipReason::NotAnIndividual,
            Resolution::Missing => SkipReason::Missing,
            Resolution::NotAReference => SkipReason::NotAReference,
        };

        let unresolved = UnresolvedReference {
            family: family_record.reference().map(str::to_string),
            role,
            reference: pointer.to_string(),
            reason,
        };
        warn!(%unresolved, "skipping family member");
        report.unresolved.push(unresolved);
    }

    (parents, offspring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_from_str;

    fn linked(doc: &str) -> (GedcomTree, LinkReport) {
        let mut tree = build_from_str(doc).unwrap();
        let index = ReferenceIndex::build(&tree);
        let report = link(&mut tree, &index);
        (tree, report)
    }

    #[test]
    fn test_no_families() {
        let (tree, report) = linked("0 @I1@ INDI\n1 NAME A /B/");
        assert_eq!(report, LinkReport::default());
        let individual = tree.individual(tree.individuals()[0]).unwrap();
        assert!(individual.families().is_empty());
    }

    #[test]
    fn test_single_parent_has_no_spouse() {
        let (tree, report) = linked("0 @I1@ INDI\n0 @I2@ INDI\n0 @F1@ FAM\n1 WIFE @I1@\n1 CHIL @I2@");
        assert!(report.is_clean());
        let mother = tree.individual(tree.individuals()[0]).unwrap();
        assert!(mother.spouses().is_empty());
        assert_eq!(mother.children(), &[tree.individuals()[1]]);
    }

    #[test]
    fn test_skip_reasons() {
        let (_, report) = linked(
            "0 @I1@ INDI\n0 @N1@ NOTE x\n0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @N1@\n1 CHIL @I9@\n1 CHIL nobody\n1 CHIL",
        );
        let reasons: Vec<SkipReason> = report.unresolved.iter().map(|u| u.reason).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::NotAnIndividual,
                SkipReason::Missing,
                SkipReason::NotAReference,
                SkipReason::NotAReference,
            ]
        );
        assert_eq!(report.linked_members, 1);
        assert_eq!(report.unresolved[0].family.as_deref(), Some("@F1@"));
        assert_eq!(report.unresolved[0].role, MemberRole::Wife);
    }

    #[test]
    fn test_unresolved_display() {
        let unresolved = UnresolvedReference {
            family: Some("@F1@".to_string()),
            role: MemberRole::Child,
            reference: "@I9@".to_string(),
            reason: SkipReason::Missing,
        };
        assert_eq!(unresolved.to_string(), "@F1@ CHIL @I9@: no such record");
    }
}
