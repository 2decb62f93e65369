// Rust guideline compliant 2026-02-06

//! Unit tests for line parsing and tree building.
//!
//! These tests exercise the public parsing entry points on complete
//! documents: nesting, tag grouping, individual detection and the
//! structural errors that abort a parse.

use lineage_core::{Error, Genealogy, GedcomTree, RecordId, RecordKind};
use std::io::Cursor;

const SAMPLE: &str = "\
0 HEAD
1 SOUR Lineage
2 VERS 1.0
1 CHAR UTF-8
0 @I1@ INDI
1 NAME John /Smith/
1 NOTE first line
1 NOTE second  line
0 @N1@ NOTE shared note
0 TRLR
";

fn tree(doc: &str) -> GedcomTree {
    lineage_core::source::parse_str(doc).expect("Document should parse")
}

fn only_child(tree: &GedcomTree, parent: RecordId, tag: &str) -> RecordId {
    let ids = tree.get(parent).children_with_tag(tag);
    assert_eq!(ids.len(), 1, "expected one {} under {}", tag, tree.get(parent).tag());
    ids[0]
}

#[test]
fn test_top_level_records_in_order() {
    let tree = tree(SAMPLE);
    let tags: Vec<&str> = tree
        .get(tree.root())
        .children()
        .iter()
        .map(|&id| tree.get(id).tag())
        .collect();
    assert_eq!(tags, vec!["HEAD", "INDI", "NOTE", "TRLR"]);
    assert_eq!(tree.len(), 10);
}

#[test]
fn test_root_is_synthetic() {
    let tree = tree(SAMPLE);
    let root = tree.get(tree.root());
    assert_eq!(root.level(), -1);
    assert_eq!(root.reference(), None);
    assert_eq!(root.data(), None);
}

#[test]
fn test_nested_records() {
    let tree = tree(SAMPLE);
    let head = tree.top_level("HEAD")[0];
    let sour = only_child(&tree, head, "SOUR");
    let vers = only_child(&tree, sour, "VERS");

    assert_eq!(tree.get(sour).data(), Some("Lineage"));
    assert_eq!(tree.get(vers).level(), 2);
    assert_eq!(tree.get(vers).data(), Some("1.0"));
}

#[test]
fn test_children_grouped_by_tag() {
    let tree = tree(SAMPLE);
    let person = tree.individuals()[0];
    let notes = tree.get(person).children_with_tag("NOTE");

    assert_eq!(notes.len(), 2);
    assert_eq!(tree.get(notes[0]).data(), Some("first line"));
    assert_eq!(tree.get(notes[1]).data(), Some("second  line"));
    assert!(tree.get(person).children_with_tag("BIRT").is_empty());
    assert_eq!(tree.get(person).children().len(), 3);
}

#[test]
fn test_individual_detection() {
    let tree = tree(SAMPLE);
    let person = tree.individuals()[0];
    assert!(matches!(tree.get(person).kind(), RecordKind::Individual(_)));
    assert_eq!(tree.get(person).reference(), Some("@I1@"));

    let note = tree.top_level("NOTE")[0];
    assert!(!tree.get(note).is_individual());
    assert_eq!(tree.get(note).reference(), Some("@N1@"));
    assert_eq!(tree.get(note).data(), Some("shared note"));
}

#[test]
fn test_indi_without_reference_is_plain() {
    let tree = tree("0 INDI\n1 NAME Anonymous /Person/");
    let record = tree.top_level("INDI")[0];
    assert!(!tree.get(record).is_individual());
    assert!(tree.individual(record).is_none());
}

#[test]
fn test_names_are_derived() {
    let tree = tree(SAMPLE);
    let person = tree.individual(tree.individuals()[0]).unwrap();
    assert_eq!(person.full_name(), "John /Smith/");
    assert_eq!(person.surname(), "Smith");
}

#[test]
fn test_first_name_wins() {
    let tree = tree("0 @I1@ INDI\n1 NAME Jane /Doe/\n1 NAME Jane /Roe/");
    let person = tree.individual(tree.individuals()[0]).unwrap();
    assert_eq!(person.surname(), "Doe");
}

#[test]
fn test_missing_name_is_empty() {
    let tree = tree("0 @I1@ INDI\n1 SEX F");
    let person = tree.individual(tree.individuals()[0]).unwrap();
    assert_eq!(person.full_name(), "");
    assert_eq!(person.surname(), "");
}

#[test]
fn test_crlf_and_bom_input() {
    let doc = Genealogy::from_reader(Cursor::new("\u{feff}0 HEAD\r\n1 CHAR UTF-8\r\n\r\n0 TRLR\r\n"))
        .expect("Document should parse");
    assert_eq!(doc.get_nodes("HEAD").len(), 1);
    assert_eq!(doc.get_nodes("TRLR").len(), 1);
    assert_eq!(doc.tree().len(), 3);
}

#[test]
fn test_shallower_line_closes_several_levels() {
    let tree = tree("0 A\n1 B\n2 C\n3 D\n1 E\n0 F");
    let a = tree.top_level("A")[0];
    let tags: Vec<&str> = tree
        .get(a)
        .children()
        .iter()
        .map(|&id| tree.get(id).tag())
        .collect();
    assert_eq!(tags, vec!["B", "E"]);
    assert_eq!(tree.top_level("F").len(), 1);
}

#[test]
fn test_empty_document() {
    let doc: Genealogy = "".parse().unwrap();
    assert!(doc.tree().is_empty());
    assert!(doc.individuals().is_empty());
    assert!(doc.report().is_clean());
    assert_eq!(doc.to_gedcom_string(), "");
}

#[test]
fn test_writer_round_trip() {
    let doc: Genealogy = SAMPLE.parse().unwrap();
    assert_eq!(doc.to_string(), SAMPLE);
}

#[test]
fn test_negative_level_is_malformed() {
    let err = "0 HEAD\n-1 FOO".parse::<Genealogy>().unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
}

#[test]
fn test_non_numeric_level_is_malformed() {
    let err = "0 HEAD\nx TAG data".parse::<Genealogy>().unwrap_err();
    match err {
        Error::MalformedLine { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content, "x TAG data");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_single_token_is_malformed() {
    let err = "0 HEAD\n1".parse::<Genealogy>().unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
}

#[test]
fn test_level_jump_is_malformed() {
    let err = "0 HEAD\n2 VERS 1".parse::<Genealogy>().unwrap_err();
    match err {
        Error::MalformedLine { line, reason, .. } => {
            assert_eq!(line, 2);
            assert!(reason.contains("cannot follow"), "reason: {}", reason);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_first_line_must_be_level_zero() {
    let err = "1 NAME Nobody".parse::<Genealogy>().unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 1, .. }));
}

#[test]
fn test_error_line_counts_blank_lines() {
    let err = "0 HEAD\n\n\nbad".parse::<Genealogy>().unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 4, .. }));
}

#[test]
fn test_deeply_nested_document() {
    let depth = 50_000;
    let text: String = (0..depth).map(|level| format!("{} NOTE x\n", level)).collect();
    let doc: Genealogy = text.parse().expect("Deep document should parse");

    assert_eq!(doc.tree().len(), depth);
    assert_eq!(doc.to_gedcom_string(), text);
}

#[test]
fn test_record_lookup_by_id() {
    let doc: Genealogy = SAMPLE.parse().unwrap();
    let person = doc.individuals()[0];
    let record = doc.record(person);

    assert_eq!(record.tag(), "INDI");
    assert_eq!(record.reference(), Some("@I1@"));
    assert_eq!(doc.record(doc.root()).level(), -1);
}

#[test]
fn test_payload_keeps_no_break_space() {
    let text = "0 HEAD\n1 NOTE abc\u{a0}\n";
    let doc: Genealogy = text.parse().unwrap();
    let head = doc.get_nodes("HEAD")[0];
    let note = doc.record(head).children()[0];

    assert_eq!(doc.record(note).data(), Some("abc\u{a0}"));
    assert_eq!(doc.to_gedcom_string(), text);
}
