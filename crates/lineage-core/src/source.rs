// Rust guideline compliant 2026-02-06

//! Reading GEDCOM input.
//!
//! Opens files and readers and feeds their lines to the
//! [`TreeBuilder`]. Any IO failure aborts the parse; no partial tree is
//! returned.

use crate::builder::TreeBuilder;
use crate::tree::GedcomTree;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parses a file into a tree.
///
/// # Arguments
///
/// * `path` - Path to the GEDCOM file
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be opened or read,
/// and [`Error::MalformedLine`] on structural corruption.
pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<GedcomTree> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading source");

    let file = File::open(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader(BufReader::new(file)).map_err(|err| match err {
        Error::Io(source) => Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses any buffered reader into a tree.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails (including invalid UTF-8) and
/// [`Error::MalformedLine`] on structural corruption.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<GedcomTree> {
    TreeBuilder::new(reader.lines()).build()
}

/// Parses an in-memory document into a tree.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] on structural corruption.
pub fn parse_str(text: &str) -> Result<GedcomTree> {
    crate::builder::build_from_str(text)
}
