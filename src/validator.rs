//! Apply a rule set to a document's text.

use crate::report::ValidationResult;
use crate::rule::RuleSet;

/// Rule name used for the synthetic result of a document that could not be read.
pub const DOCUMENT_EXISTS_RULE: &str = "document-exists";

/// Rule name used for the synthetic result of an id the registry does not know.
pub const DOCUMENT_REGISTERED_RULE: &str = "document-registered";

/// Evaluate every rule of `rule_set` against `text`, in declaration order.
///
/// Earlier failures never stop later rules from running, so the output
/// always holds exactly one result per rule.
pub fn validate(document_id: &str, text: &str, rule_set: &RuleSet) -> Vec<ValidationResult> {
    rule_set
        .rules()
        .iter()
        .map(|rule| {
            let outcome = rule.evaluate(text);
            ValidationResult::new(document_id, rule.name(), outcome.passed, outcome.detail)
        })
        .collect()
}

/// Failing result standing in for a document whose file could not be read.
pub fn document_not_found(document_id: &str, path: &str) -> ValidationResult {
    ValidationResult::new(
        document_id,
        DOCUMENT_EXISTS_RULE,
        false,
        format!("document not found: {}", path),
    )
}

/// Failing result standing in for an id missing from the registry.
pub fn unknown_document(document_id: &str) -> ValidationResult {
    ValidationResult::new(
        document_id,
        DOCUMENT_REGISTERED_RULE,
        false,
        format!("unknown document '{}'", document_id),
    )
}
