//! Aggregation of per-rule results into a run report.

use serde::Serialize;

/// Outcome of one rule against one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub document_id: String,
    pub rule_name: String,
    pub passed: bool,
    pub detail: String,
}

impl ValidationResult {
    pub fn new(
        document_id: impl Into<String>,
        rule_name: impl Into<String>,
        passed: bool,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            rule_name: rule_name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

/// Pass/fail tally for a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub id: String,
    pub checked: usize,
    pub failed: usize,
}

impl DocumentSummary {
    pub fn passed(&self) -> bool {
        self.checked > 0 && self.failed == 0
    }
}

/// Everything one validation run produced.
///
/// The counts are derived from `results` at construction and never updated
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    results: Vec<ValidationResult>,
    passed_count: usize,
    failed_count: usize,
}

impl Report {
    /// Build a report from the results of a run.
    pub fn aggregate(results: Vec<ValidationResult>) -> Self {
        let passed_count = results.iter().filter(|r| r.passed).count();
        let failed_count = results.len() - passed_count;
        Self {
            results,
            passed_count,
            failed_count,
        }
    }

    /// Combine partial reports, keeping their order.
    pub fn merge<I: IntoIterator<Item = Report>>(parts: I) -> Self {
        Self::aggregate(parts.into_iter().flat_map(|p| p.results).collect())
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    pub fn failed_count(&self) -> usize {
        self.failed_count
    }

    /// Per-document summaries in the order documents first appear.
    pub fn documents(&self) -> Vec<DocumentSummary> {
        let mut summaries: Vec<DocumentSummary> = Vec::new();
        for result in &self.results {
            let idx = match summaries.iter().position(|s| s.id == result.document_id) {
                Some(idx) => idx,
                None => {
                    summaries.push(DocumentSummary {
                        id: result.document_id.clone(),
                        checked: 0,
                        failed: 0,
                    });
                    summaries.len() - 1
                }
            };
            summaries[idx].checked += 1;
            if !result.passed {
                summaries[idx].failed += 1;
            }
        }
        summaries
    }

    /// Results recorded for one document.
    pub fn results_for<'a>(&'a self, document_id: &'a str) -> impl Iterator<Item = &'a ValidationResult> {
        self.results
            .iter()
            .filter(move |r| r.document_id == document_id)
    }

    /// True when at least one rule ran and none failed.
    pub fn is_success(&self) -> bool {
        !self.results.is_empty() && self.failed_count == 0
    }

    /// Process exit code for this report: 0 on success, 1 otherwise.
    pub fn exit_status(&self) -> i32 {
        exit_status(self)
    }
}

/// Process exit code for a report: 0 on success, 1 otherwise.
pub fn exit_status(report: &Report) -> i32 {
    if report.is_success() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(doc: &str, rule: &str, passed: bool) -> ValidationResult {
        ValidationResult::new(doc, rule, passed, "")
    }

    #[test]
    fn test_aggregate_counts() {
        let report = Report::aggregate(vec![
            result("a", "r1", true),
            result("a", "r2", false),
            result("b", "r1", true),
        ]);
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.results().len(), 3);
        assert!(!report.is_success());
        assert_eq!(report.exit_status(), 1);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let results = vec![result("a", "r1", true), result("b", "r1", false)];
        assert_eq!(
            Report::aggregate(results.clone()),
            Report::aggregate(results)
        );
    }

    #[test]
    fn test_all_passing_exits_zero() {
        let report = Report::aggregate(vec![result("a", "r1", true), result("b", "r1", true)]);
        assert!(report.is_success());
        assert_eq!(exit_status(&report), 0);
    }

    #[test]
    fn test_empty_report_is_not_success() {
        let report = Report::aggregate(Vec::new());
        assert!(!report.is_success());
        assert_eq!(report.exit_status(), 1);
    }

    #[test]
    fn test_documents_summary_keeps_first_seen_order() {
        let report = Report::aggregate(vec![
            result("b", "r1", true),
            result("a", "r1", false),
            result("b", "r2", true),
            result("a", "r2", false),
        ]);
        let docs = report.documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "b");
        assert!(docs[0].passed());
        assert_eq!(docs[1].id, "a");
        assert_eq!(docs[1].failed, 2);
        assert!(!docs[1].passed());
    }

    #[test]
    fn test_merge_preserves_order() {
        let first = Report::aggregate(vec![result("a", "r1", true)]);
        let second = Report::aggregate(vec![result("b", "r1", false)]);
        let merged = Report::merge(vec![first, second]);
        let ids: Vec<&str> = merged.results().iter().map(|r| r.document_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(merged.failed_count(), 1);
    }

    #[test]
    fn test_results_for_filters_by_document() {
        let report = Report::aggregate(vec![result("a", "r1", true), result("b", "r1", false)]);
        let b: Vec<_> = report.results_for("b").collect();
        assert_eq!(b.len(), 1);
        assert!(!b[0].passed);
    }
}
