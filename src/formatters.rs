//! Output formatters for validation reports
//!
//! Turns a [`Report`] into terminal text or JSON. Nothing here affects the
//! exit status of a run.

use colored::Colorize;
use serde::Serialize;

use crate::report::{DocumentSummary, Report, ValidationResult};
use crate::ui::{self, format};

/// Maximum width of a rule detail in text output.
const DETAIL_WIDTH: usize = 100;
const SEPARATOR_WIDTH: usize = 60;

/// Format a report as human-readable text.
///
/// Failing rules are always listed under their document; passing rules only
/// when `verbose` is set.
pub fn format_text_report(report: &Report, verbose: bool) -> String {
    let mut output = Vec::new();

    for doc in report.documents() {
        output.push(format_document_line(&doc));
        for result in report.results_for(&doc.id) {
            if verbose || !result.passed {
                output.push(format_result_line(result));
            }
        }
    }

    output.push(String::new());
    output.push(format_summary(report));
    output.join("\n")
}

fn format_document_line(doc: &DocumentSummary) -> String {
    format!(
        "{} {} {}",
        ui::outcome_icon(doc.passed()),
        doc.id.cyan(),
        format!("({})", format::plural(doc.checked, "rule")).dimmed()
    )
}

fn format_result_line(result: &ValidationResult) -> String {
    format!(
        "    {} {}: {}",
        ui::outcome_icon(result.passed),
        result.rule_name,
        format::truncate(&result.detail, DETAIL_WIDTH)
    )
}

/// Separator-framed summary block with document and rule totals.
pub fn format_summary(report: &Report) -> String {
    let docs = report.documents();
    let failed_docs = docs.iter().filter(|d| !d.passed()).count();
    let passed_docs = docs.len() - failed_docs;

    let mut counts = format!(
        "{} checked, {} {}",
        format::plural(docs.len(), "document"),
        passed_docs,
        "passed".green()
    );
    if failed_docs > 0 {
        counts.push_str(&format!(", {} {}", failed_docs, "failed".red()));
    }

    let status = if report.is_success() {
        ui::colors::success("All documents satisfy their schema")
    } else if docs.is_empty() {
        ui::colors::error("No documents were checked")
    } else {
        ui::colors::error("Schema violations found")
    };

    [
        format::separator(SEPARATOR_WIDTH).cyan().to_string(),
        format!("{} {}", ui::outcome_icon(report.is_success()), status),
        format!("  {}", counts),
        format!(
            "  {} of {} failed",
            format::plural(report.failed_count(), "rule"),
            report.results().len()
        ),
        format::separator(SEPARATOR_WIDTH).cyan().to_string(),
    ]
    .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    success: bool,
    exit_status: i32,
    passed_count: usize,
    failed_count: usize,
    documents: Vec<JsonDocument>,
    results: &'a [ValidationResult],
}

#[derive(Serialize)]
struct JsonDocument {
    id: String,
    passed: bool,
    checked: usize,
    failed: usize,
}

/// Format a report as pretty-printed JSON.
pub fn format_json_report(report: &Report) -> serde_json::Result<String> {
    let documents = report
        .documents()
        .into_iter()
        .map(|d| JsonDocument {
            passed: d.passed(),
            id: d.id,
            checked: d.checked,
            failed: d.failed,
        })
        .collect();

    serde_json::to_string_pretty(&JsonReport {
        success: report.is_success(),
        exit_status: report.exit_status(),
        passed_count: report.passed_count(),
        failed_count: report.failed_count(),
        documents,
        results: report.results(),
    })
}
