// Rust guideline compliant 2026-02-06

//! Output formatting module for the Lineage CLI.
//!
//! This module provides functionality for formatting individuals, link
//! problems and check results in various output formats (JSON, table,
//! plain text).

use crate::commands::check::CheckReport;
use lineage_core::{IndividualSummary, OutputFormat, UnresolvedReference};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting Lineage data in different output formats.
pub trait OutputFormatter {
    /// Formats a single individual with all of their relations.
    ///
    /// # Arguments
    /// * `summary` - The individual to format
    ///
    /// # Returns
    /// A formatted string representation of the individual
    fn format_individual(&self, summary: &IndividualSummary) -> String;

    /// Formats a list of individuals, one row each.
    ///
    /// # Arguments
    /// * `summaries` - The individuals to format
    ///
    /// # Returns
    /// A formatted string representation of the list
    fn format_list(&self, summaries: &[IndividualSummary]) -> String;

    /// Formats family members that could not be linked.
    fn format_unresolved(&self, unresolved: &[UnresolvedReference]) -> String;

    /// Formats the result of a document check.
    fn format_check(&self, report: &CheckReport) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// JSON output formatter.
///
/// Formats summaries as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_individual(&self, summary: &IndividualSummary) -> String {
        serde_json::to_string_pretty(summary)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize individual" }).to_string())
    }

    fn format_list(&self, summaries: &[IndividualSummary]) -> String {
        let output = json!({
            "individuals": summaries,
            "total": summaries.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize individual list" }).to_string())
    }

    fn format_unresolved(&self, unresolved: &[UnresolvedReference]) -> String {
        let output = json!({
            "unresolved": unresolved,
            "total": unresolved.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize references" }).to_string())
    }

    fn format_check(&self, report: &CheckReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize check report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats individuals as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_individual(&self, summary: &IndividualSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("Reference:   {}\n", summary.reference));
        output.push_str(&format!("Name:        {}\n", or_dash(&summary.full_name)));
        output.push_str(&format!("Surname:     {}\n", or_dash(&summary.surname)));

        if let Some(location) = &summary.location {
            output.push_str(&format!("Location:    {}\n", location));
        }
        if !summary.parents.is_empty() {
            output.push_str(&format!("Parents:     {}\n", summary.parents.join(", ")));
        }
        if !summary.spouses.is_empty() {
            output.push_str(&format!("Spouses:     {}\n", summary.spouses.join(", ")));
        }
        if !summary.children.is_empty() {
            output.push_str(&format!("Children:    {}\n", summary.children.join(", ")));
        }
        if !summary.families.is_empty() {
            output.push_str(&format!("Families:    {}\n", summary.families.join(", ")));
        }

        output
    }

    fn format_list(&self, summaries: &[IndividualSummary]) -> String {
        if summaries.is_empty() {
            return "No individuals found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Reference", "Name", "Surname", "Location"]);

        for summary in summaries {
            builder.push_record(vec![
                summary.reference.clone(),
                summary.display_name(),
                or_dash(&summary.surname).to_string(),
                summary.location.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_unresolved(&self, unresolved: &[UnresolvedReference]) -> String {
        if unresolved.is_empty() {
            return "All family members resolved.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Family", "Role", "Reference", "Reason"]);

        for entry in unresolved {
            builder.push_record(vec![
                entry.family.clone().unwrap_or_else(|| "-".to_string()),
                entry.role.tag().to_string(),
                or_dash(&entry.reference).to_string(),
                entry.reason.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_check(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("Individuals:  {}\n", report.individuals));
        output.push_str(&format!("Families:     {}\n", report.families));
        output.push_str(&format!("Linked:       {}\n", report.linked_members));

        if !report.duplicates.is_empty() {
            output.push_str(&format!(
                "Duplicates:   {}\n",
                report.duplicates.join(", ")
            ));
        }
        if let Some(cycle) = &report.cycle {
            output.push_str(&format!("Cycle:        {}\n", cycle.join(" -> ")));
        }
        if !report.unresolved.is_empty() {
            output.push_str(&self.format_unresolved(&report.unresolved));
            output.push('\n');
        }

        output.push_str(if report.is_clean() {
            "Status:       ok\n"
        } else {
            "Status:       problems found\n"
        });

        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats data as simple whitespace-separated text without tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_individual(&self, summary: &IndividualSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", summary.reference));
        output.push_str(&format!("{}\n", summary.display_name()));
        for (label, references) in [
            ("parents", &summary.parents),
            ("spouses", &summary.spouses),
            ("children", &summary.children),
            ("families", &summary.families),
        ] {
            if !references.is_empty() {
                output.push_str(&format!("{} {}\n", label, references.join(" ")));
            }
        }

        output
    }

    fn format_list(&self, summaries: &[IndividualSummary]) -> String {
        if summaries.is_empty() {
            return "No individuals found.".to_string();
        }

        let mut output = String::new();
        for summary in summaries {
            output.push_str(&format!("{} {}\n", summary.reference, summary.display_name()));
        }
        output
    }

    fn format_unresolved(&self, unresolved: &[UnresolvedReference]) -> String {
        unresolved
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }

    fn format_check(&self, report: &CheckReport) -> String {
        let mut output = self.format_unresolved(&report.unresolved);
        for duplicate in &report.duplicates {
            output.push_str(&format!("duplicate {}\n", duplicate));
        }
        if let Some(cycle) = &report.cycle {
            output.push_str(&format!("cycle {}\n", cycle.join(" ")));
        }
        if report.is_clean() {
            output.push_str("ok\n");
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
