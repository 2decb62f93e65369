// Rust guideline compliant 2026-02-06

//! Line parser.
//!
//! Turns one `LEVEL [REFERENCE] TAG [DATA...]` line into a childless
//! [`Record`]. Tokens are separated by single spaces; the data payload is
//! cut out of the line positionally so runs of interior spaces survive.

use crate::models::{is_reference, Record, INDIVIDUAL_TAG};
use crate::{Error, Result};

/// Fields of one parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Nesting level, always `>= 0`.
    pub level: i32,
    /// Record tag.
    pub tag: String,
    /// Cross-reference token in front of the tag, if present.
    pub reference: Option<String>,
    /// Remainder of the line after the tag.
    pub data: Option<String>,
}

impl ParsedLine {
    /// Returns true if the line declares an individual (`0 @X@ INDI`).
    pub fn is_individual(&self) -> bool {
        self.reference.is_some() && self.tag == INDIVIDUAL_TAG
    }

    /// Converts into the matching record variant.
    pub fn into_record(self) -> Record {
        if self.is_individual() {
            Record::individual(self.level, self.tag, self.reference, self.data)
        } else {
            Record::new(self.level, self.tag, self.reference, self.data)
        }
    }
}

/// Strips leading and trailing control characters and spaces.
///
/// Only characters up to U+0020 are removed, so non-ASCII whitespace such
/// as a no-break space stays part of the payload.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Parses the level token of a line.
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] if the token is negative or not an
/// unsigned decimal integer.
pub fn parse_level(token: &str, line: &str, line_number: usize) -> Result<i32> {
    if let Some(magnitude) = token.strip_prefix('-') {
        if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::malformed(line_number, line, "negative level"));
        }
    }

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(
            line_number,
            line,
            format!("level {:?} is not a non-negative integer", token),
        ));
    }

    token
        .parse()
        .map_err(|_| Error::malformed(line_number, line, "level out of range"))
}

/// Parses one line into its fields.
///
/// # Arguments
///
/// * `line` - The raw line; surrounding whitespace is ignored
/// * `line_number` - One-based position used in error messages
///
/// # Errors
///
/// Returns [`Error::MalformedLine`] if the level token is invalid or the line
/// has fewer than two tokens.
pub fn parse_line(line: &str, line_number: usize) -> Result<ParsedLine> {
    let line = trim_line(line);
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() < 2 {
        return Err(Error::malformed(
            line_number,
            line,
            "expected at least a level and a tag",
        ));
    }

    let level = parse_level(tokens[0], line, line_number)?;

    if tokens.len() == 2 {
        return Ok(ParsedLine {
            level,
            tag: tokens[1].to_string(),
            reference: None,
            data: None,
        });
    }

    if is_reference(tokens[1]) {
        Ok(ParsedLine {
            level,
            tag: tokens[2].to_string(),
            reference: Some(tokens[1].to_string()),
            data: Some(rest_after_token(line, 2).to_string()),
        })
    } else {
        Ok(ParsedLine {
            level,
            tag: tokens[1].to_string(),
            reference: None,
            data: Some(rest_after_token(line, 1).to_string()),
        })
    }
}

/// Returns everything after the space that ends token `index`.
///
/// For `1 PLAC Saturn  Moon` and index 1 this is `Saturn  Moon`. Empty if
/// the line has no such space.
fn rest_after_token(line: &str, index: usize) -> &str {
    line.splitn(index + 2, ' ').nth(index + 1).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_no_break_space_kept() {
        let parsed = parse_line("1 NOTE abc\u{a0}", 1).unwrap();
        assert_eq!(parsed.data.as_deref(), Some("abc\u{a0}"));

        let parsed = parse_line("\t1 NOTE abc \r", 1).unwrap();
        assert_eq!(parsed.data.as_deref(), Some("abc"));
    }

    #[test]
    fn test_two_tokens() {
        let parsed = parse_line("0 HEAD", 1).unwrap();
        assert_eq!(parsed.level, 0);
        assert_eq!(parsed.tag, "HEAD");
        assert_eq!(parsed.reference, None);
        assert_eq!(parsed.data, None);
    }

    #[test]
    fn test_tag_and_data() {
        let parsed = parse_line("2 PLAC Saturn", 1).unwrap();
        assert_eq!(parsed.level, 2);
        assert_eq!(parsed.tag, "PLAC");
        assert_eq!(parsed.data.as_deref(), Some("Saturn"));
    }

    #[test]
    fn test_reference_without_data() {
        let parsed = parse_line("0 @I1@ INDI", 1).unwrap();
        assert_eq!(parsed.reference.as_deref(), Some("@I1@"));
        assert_eq!(parsed.tag, "INDI");
        assert_eq!(parsed.data.as_deref(), Some(""));
        assert!(parsed.is_individual());
        assert!(parsed.into_record().is_individual());
    }

    #[test]
    fn test_reference_with_data() {
        let parsed = parse_line("0 @N1@ NOTE some  spaced   note", 3).unwrap();
        assert_eq!(parsed.reference.as_deref(), Some("@N1@"));
        assert_eq!(parsed.tag, "NOTE");
        assert_eq!(parsed.data.as_deref(), Some("some  spaced   note"));
        assert!(!parsed.is_individual());
    }

    #[test]
    fn test_pointer_is_data() {
        let parsed = parse_line("1 HUSB @I1@", 1).unwrap();
        assert_eq!(parsed.tag, "HUSB");
        assert_eq!(parsed.reference, None);
        assert_eq!(parsed.data.as_deref(), Some("@I1@"));
    }

    #[test]
    fn test_interior_spaces_preserved() {
        let parsed = parse_line("1 NAME John  /Smith/", 1).unwrap();
        assert_eq!(parsed.data.as_deref(), Some("John  /Smith/"));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let parsed = parse_line("  1 SEX M \r", 1).unwrap();
        assert_eq!(parsed.tag, "SEX");
        assert_eq!(parsed.data.as_deref(), Some("M"));
    }

    #[test]
    fn test_single_token_rejected() {
        let err = parse_line("0", 7).unwrap_err();
        match err {
            Error::MalformedLine { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_level_rejected() {
        assert!(parse_line("x HEAD", 1).is_err());
        assert!(parse_line("+1 HEAD", 1).is_err());
        assert!(parse_line("1.5 HEAD", 1).is_err());
    }

    #[test]
    fn test_negative_level_rejected() {
        let err = parse_line("-1 HEAD", 2).unwrap_err();
        assert!(err.to_string().contains("negative level"));
    }

    #[test]
    fn test_rest_after_token() {
        assert_eq!(rest_after_token("1 PLAC Saturn", 1), "Saturn");
        assert_eq!(rest_after_token("0 @I1@ INDI", 2), "");
        assert_eq!(rest_after_token("0 @I1@ INDI x y", 2), "x y");
    }
}
