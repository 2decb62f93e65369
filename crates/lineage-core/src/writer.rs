// Rust guideline compliant 2026-02-06

//! Prints records back in the line format.
//!
//! Lines are written as `LEVEL TAG [REFERENCE] [DATA]`, except level-0
//! records with a reference, which keep the `LEVEL REFERENCE TAG [DATA]`
//! order they are declared with. Children follow their parent in input order.

use crate::models::{Record, RecordId};
use crate::tree::GedcomTree;
use std::io::{self, Write};

/// Formats a single record as one line, without its children.
pub fn format_line(record: &Record) -> String {
    let level = record.level().to_string();
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    parts.push(level.as_str());

    match record.reference() {
        Some(reference) if record.level() == 0 => {
            parts.push(reference);
            parts.push(record.tag());
        }
        Some(reference) => {
            parts.push(record.tag());
            parts.push(reference);
        }
        None => parts.push(record.tag()),
    }

    if let Some(data) = record.data().filter(|data| !data.is_empty()) {
        parts.push(data);
    }

    parts.join(" ")
}

/// Appends a record and its whole subtree to `out`, one line each.
pub fn write_record(tree: &GedcomTree, id: RecordId, out: &mut String) {
    let mut pending = vec![id];
    while let Some(next) = pending.pop() {
        let record = tree.get(next);
        out.push_str(&format_line(record));
        out.push('\n');
        pending.extend(record.children().iter().rev().copied());
    }
}

/// Formats the whole document. The synthetic root is not printed.
pub fn to_gedcom_string(tree: &GedcomTree) -> String {
    let mut out = String::new();
    for &child in tree.get(tree.root()).children() {
        write_record(tree, child, &mut out);
    }
    out
}

/// Writes the whole document to `writer`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tree<W: Write>(tree: &GedcomTree, writer: &mut W) -> io::Result<()> {
    writer.write_all(to_gedcom_string(tree).as_bytes())?;
    writer.flush()
}
