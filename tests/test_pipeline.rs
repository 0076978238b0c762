//! Library-level tests: config -> registry -> filesystem -> report

use droidlint::config::{starter_config, Config};
use droidlint::run::{run_checks, RunOptions};
use std::fs;

mod support;
use support::fixtures::load_fixture;
use support::harness::{TestHarness, DEFAULT_CONFIG};

#[test]
fn test_pipeline_from_config_file() {
    let harness = TestHarness::new();
    harness.write_doc(
        "droids/root-cause-tracing.md",
        &load_fixture("root-cause-tracing"),
    );
    harness.write_doc(
        "commands/root-cause-tracing.md",
        &load_fixture("cmd-root-cause-tracing"),
    );

    let config = Config::load_from(&harness.config_path).unwrap();
    let registry = config.registry().unwrap();
    let source = config.source(harness.path());

    let report = run_checks(&registry, &source, &RunOptions::default());

    assert_eq!(report.failed_count(), 0);
    // 5 droid rules + 1 phase rule, 2 command rules
    assert_eq!(report.passed_count(), 8);
    assert_eq!(report.exit_status(), 0);
}

#[test]
fn test_pipeline_failures_keep_document_order() {
    let harness = TestHarness::new();
    harness.write_doc("droids/root-cause-tracing.md", "short\n");

    let config = Config::parse(DEFAULT_CONFIG).unwrap();
    let registry = config.registry().unwrap();
    let source = config.source(harness.path());

    let report = run_checks(&registry, &source, &RunOptions::default());
    let ids: Vec<String> = report.documents().into_iter().map(|d| d.id).collect();

    assert_eq!(ids, vec!["root-cause-tracing", "cmd/root-cause-tracing"]);
    assert_eq!(report.exit_status(), 1);

    let missing: Vec<_> = report.results_for("cmd/root-cause-tracing").collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].rule_name, "document-exists");
}

#[test]
fn test_starter_config_against_empty_tree() {
    let harness = TestHarness::new();
    fs::write(&harness.config_path, starter_config("droidpowers")).unwrap();

    let config = Config::load_from(&harness.config_path).unwrap();
    let registry = config.registry().unwrap();
    let source = config.source(harness.path());

    let report = run_checks(
        &registry,
        &source,
        &RunOptions {
            ids: Vec::new(),
            jobs: 3,
        },
    );

    assert_eq!(report.documents().len(), registry.len());
    assert_eq!(report.passed_count(), 0);
    assert!(report
        .results()
        .iter()
        .all(|r| r.rule_name == "document-exists"));
}
