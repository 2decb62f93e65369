// Rust guideline compliant 2026-02-06

//! Tree builder.
//!
//! Nests records by level alone. A record absorbs every following line with
//! a greater level; the first line at its own level or shallower closes it
//! and every deeper record still open. Open records are kept on an explicit
//! stack, so nesting depth is bounded by memory only.

use crate::line::{parse_level, parse_line, trim_line};
use crate::models::RecordId;
use crate::tree::GedcomTree;
use crate::{Error, Result};
use std::io;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A non-blank, trimmed line together with its already-parsed level.
#[derive(Debug)]
struct PendingLine {
    number: usize,
    text: String,
    level: i32,
}

/// Cursor over a line stream with one line of lookahead.
///
/// Blank lines are skipped and a byte-order mark on the first line is
/// dropped.
pub struct LineCursor<I> {
    lines: I,
    peeked: Option<PendingLine>,
    line_number: usize,
}

impl<I> LineCursor<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Wraps a line iterator.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            peeked: None,
            line_number: 0,
        }
    }

    /// Returns the level of the next line without consuming it.
    ///
    /// # Errors
    ///
    /// Returns an IO error from the underlying stream, or
    /// [`Error::MalformedLine`] if the level token is invalid.
    pub fn peek_level(&mut self) -> Result<Option<i32>> {
        if self.peeked.is_none() {
            self.peeked = self.read_next()?;
        }
        Ok(self.peeked.as_ref().map(|line| line.level))
    }

    /// Number of physical lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn next_line(&mut self) -> Result<Option<PendingLine>> {
        match self.peeked.take() {
            Some(line) => Ok(Some(line)),
            None => self.read_next(),
        }
    }

    fn read_next(&mut self) -> Result<Option<PendingLine>> {
        for raw in self.lines.by_ref() {
            let raw = raw?;
            self.line_number += 1;

            let mut text = raw.as_str();
            if self.line_number == 1 {
                text = text.trim_start_matches(BYTE_ORDER_MARK);
            }
            let text = trim_line(text);
            if text.is_empty() {
                continue;
            }

            let level_token = text.split(' ').next().unwrap_or_default();
            let level = parse_level(level_token, text, self.line_number)?;
            return Ok(Some(PendingLine {
                number: self.line_number,
                text: text.to_string(),
                level,
            }));
        }
        Ok(None)
    }
}

/// Builds a [`GedcomTree`] from a stream of lines.
pub struct TreeBuilder<I> {
    cursor: LineCursor<I>,
}

impl<I> TreeBuilder<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Creates a builder over a line stream.
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            cursor: LineCursor::new(lines.into_iter()),
        }
    }

    /// Consumes the whole stream and returns the nested tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLine`] for any line that cannot be parsed or
    /// whose level does not fit the structure, and [`Error::Io`] if the
    /// stream fails. No partial tree is returned.
    pub fn build(mut self) -> Result<GedcomTree> {
        let mut tree = GedcomTree::new();
        // Records whose subtree is still open, from the root down.
        let mut open = vec![tree.root()];

        while let Some(level) = self.cursor.peek_level()? {
            close_open_records(&mut tree, &mut open, level);

            let Some(line) = self.cursor.next_line()? else {
                break;
            };

            let parent = open.last().copied().unwrap_or_else(|| tree.root());
            let parent_level = tree.get(parent).level();
            if level != parent_level + 1 {
                let reason = if parent_level < 0 {
                    format!("first record must be level 0, found level {}", level)
                } else {
                    format!("level {} cannot follow level {}", level, parent_level)
                };
                return Err(Error::malformed(line.number, &line.text, reason));
            }

            let parsed = parse_line(&line.text, line.number)?;
            let child = tree.insert(parsed.into_record());
            tree.attach(parent, child);
            open.push(child);
        }

        close_open_records(&mut tree, &mut open, 0);
        debug!(
            records = tree.len(),
            lines = self.cursor.line_number(),
            "built record tree"
        );
        Ok(tree)
    }
}

/// Closes every open record at `level` or deeper, finalizing each one.
///
/// The root stays open.
fn close_open_records(tree: &mut GedcomTree, open: &mut Vec<RecordId>, level: i32) {
    while open.len() > 1 {
        let Some(&top) = open.last() else {
            break;
        };
        if tree.get(top).level() < level {
            break;
        }
        open.pop();
        tree.finalize(top);
    }
}

/// Builds a tree from an in-memory document.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] on structural corruption.
pub fn build_from_str(text: &str) -> Result<GedcomTree> {
    TreeBuilder::new(text.lines().map(|line| Ok(line.to_string()))).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let tree = build_from_str("").unwrap();
        assert!(tree.is_empty());
        assert!(tree.get(tree.root()).children().is_empty());
    }

    #[test]
    fn test_blank_lines_only() {
        let tree = build_from_str("\n   \n\r\n").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_nesting() {
        let tree = build_from_str("0 HEAD\n1 SOUR x\n2 VERS 1\n1 CHAR UTF-8\n0 TRLR").unwrap();
        let root = tree.get(tree.root());
        assert_eq!(root.children().len(), 2);

        let head = tree.get(root.children()[0]);
        assert_eq!(head.tag(), "HEAD");
        assert_eq!(head.children().len(), 2);

        let sour = tree.get(head.children_with_tag("SOUR")[0]);
        assert_eq!(sour.children_with_tag("VERS").len(), 1);
        assert_eq!(tree.get(root.children()[1]).tag(), "TRLR");
    }

    #[test]
    fn test_first_line_must_be_level_zero() {
        let err = build_from_str("1 NAME x").unwrap_err();
        match err {
            Error::MalformedLine { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("level 0"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_level_jump_rejected() {
        let err = build_from_str("0 HEAD\n2 VERS 1").unwrap_err();
        match err {
            Error::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_level_rejected() {
        assert!(build_from_str("0 HEAD\n-1 FOO").is_err());
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let tree = build_from_str("\u{feff}0 HEAD\n0 TRLR").unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let err = build_from_str("0 HEAD\n\n1").unwrap_err();
        match err {
            Error::MalformedLine { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_io_error_aborts() {
        let lines = vec![
            Ok("0 HEAD".to_string()),
            Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
        ];
        let err = TreeBuilder::new(lines).build().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let depth = 100_000;
        let doc: String = (0..depth).map(|level| format!("{} NOTE x\n", level)).collect();
        let tree = build_from_str(&doc).unwrap();
        assert_eq!(tree.len(), depth);

        let deepest = tree.iter().last().map(|(_, record)| record.level());
        assert_eq!(deepest, Some(depth as i32 - 1));
    }

    #[test]
    fn test_name_finalized_after_deeper_lines() {
        let tree = build_from_str("0 @I1@ INDI\n1 BIRT\n2 PLAC Here\n1 NAME Ann /Lee/\n0 TRLR").unwrap();
        let individual = tree.individual(tree.individuals()[0]).unwrap();
        assert_eq!(individual.surname(), "Lee");
    }

    #[test]
    fn test_non_ascii_whitespace_kept() {
        let tree = build_from_str("0 HEAD\n1 NOTE abc\u{a0}\r").unwrap();
        let head = tree.top_level("HEAD")[0];
        let note = tree.get(head).children()[0];
        assert_eq!(tree.get(note).data(), Some("abc\u{a0}"));
    }

    #[test]
    fn test_individual_finalized_with_surname() {
        let tree = build_from_str("0 @I1@ INDI\n1 NAME John /Smith/\n1 NAME Johnny /Smyth/").unwrap();
        let id = tree.individuals()[0];
        let individual = tree.individual(id).unwrap();
        assert_eq!(individual.full_name(), "John /Smith/");
        assert_eq!(individual.surname(), "Smith");
    }
}
