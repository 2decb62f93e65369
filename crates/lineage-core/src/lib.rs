// Rust guideline compliant 2026-02-06

//! Lineage Core Library
//!
//! This crate parses GEDCOM genealogy files and links their people together:
//! - Data models (Record, Individual, RecordId)
//! - Line parser and level-driven tree builder
//! - Reference index and family linker
//! - Lineage graph (ancestors, descendants, cycle detection)
//! - Writer back to the line format
//! - Configuration and error types
//!
//! ```no_run
//! use lineage_core::Genealogy;
//!
//! let doc = Genealogy::from_path("family.ged")?;
//! for &id in doc.individuals() {
//!     let person = doc.tree().individual(id).unwrap();
//!     println!("{} has {} children", person.full_name(), person.children().len());
//! }
//! # Ok::<(), lineage_core::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod line;
pub mod linker;
pub mod models;
pub mod resolver;
pub mod source;
pub mod summary;
pub mod tree;
pub mod writer;

pub use builder::TreeBuilder;
pub use config::{Config, OutputFormat};
pub use document::Genealogy;
pub use error::{Error, Result};
pub use graph::LineageGraph;
pub use line::{parse_line, ParsedLine};
pub use linker::{link, LinkReport, MemberRole, SkipReason, UnresolvedReference};
pub use models::{Individual, Record, RecordId, RecordKind};
pub use resolver::{ReferenceIndex, Resolution};
pub use summary::IndividualSummary;
pub use tree::GedcomTree;
