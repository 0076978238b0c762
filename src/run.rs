//! One validation run: resolve, read, validate, aggregate.

use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;

use crate::registry::{DocumentRef, DocumentSource, Registry};
use crate::report::{Report, ValidationResult};
use crate::validator;

/// What to check and how many worker threads to use.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Document ids to check; empty means every registered document.
    /// Repeated ids are checked once.
    pub ids: Vec<String>,
    /// Worker threads. Values of 0 or 1 run sequentially.
    pub jobs: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            jobs: 1,
        }
    }
}

enum Target<'a> {
    Known(&'a DocumentRef),
    Unknown(String),
}

/// Validate the selected documents and aggregate the outcome.
///
/// Unknown ids and unreadable documents become failing results; nothing
/// here aborts the run.
pub fn run_checks(registry: &Registry, source: &dyn DocumentSource, options: &RunOptions) -> Report {
    let targets = select_targets(registry, &options.ids);
    let jobs = options.jobs.max(1).min(targets.len().max(1));

    tracing::debug!(documents = targets.len(), jobs, "starting validation run");

    if jobs == 1 {
        return Report::aggregate(check_all(registry, source, &targets));
    }

    let chunk_size = targets.len().div_ceil(jobs);
    let (tx, rx) = mpsc::channel::<(usize, Report)>();

    thread::scope(|scope| {
        for (idx, chunk) in targets.chunks(chunk_size).enumerate() {
            let tx = tx.clone();
            scope.spawn(move || {
                let partial = Report::aggregate(check_all(registry, source, chunk));
                // receiver outlives the scope
                let _ = tx.send((idx, partial));
            });
        }
    });
    drop(tx);

    let mut partials: Vec<(usize, Report)> = rx.into_iter().collect();
    partials.sort_by_key(|(idx, _)| *idx);
    Report::merge(partials.into_iter().map(|(_, report)| report))
}

fn select_targets<'a>(registry: &'a Registry, ids: &[String]) -> Vec<Target<'a>> {
    if ids.is_empty() {
        return registry.documents().map(Target::Known).collect();
    }

    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .map(|id| match registry.resolve(id) {
            Ok(doc) => Target::Known(doc),
            Err(e) => {
                tracing::warn!(%id, "{}", e);
                Target::Unknown(id.clone())
            }
        })
        .collect()
}

fn check_all(
    registry: &Registry,
    source: &dyn DocumentSource,
    targets: &[Target<'_>],
) -> Vec<ValidationResult> {
    targets
        .iter()
        .flat_map(|t| check_one(registry, source, t))
        .collect()
}

fn check_one(
    registry: &Registry,
    source: &dyn DocumentSource,
    target: &Target<'_>,
) -> Vec<ValidationResult> {
    let doc = match target {
        Target::Known(doc) => *doc,
        Target::Unknown(id) => return vec![validator::unknown_document(id)],
    };

    let text = match registry.read(doc, source) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(id = %doc.id, "{}", e);
            return vec![validator::document_not_found(&doc.id, &doc.path)];
        }
    };

    match registry.rule_set_for(&doc.id) {
        Ok(rules) => {
            let results = validator::validate(&doc.id, &text, rules);
            tracing::debug!(
                id = %doc.id,
                category = %doc.category,
                failed = results.iter().filter(|r| !r.passed).count(),
                "validated document"
            );
            results
        }
        // resolve() just returned this id
        Err(_) => vec![validator::unknown_document(&doc.id)],
    }
}
