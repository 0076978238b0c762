//! `droidlint check`: validate documents and report.

use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;

use droidlint::formatters;
use droidlint::run::{run_checks, RunOptions};
use droidlint::ui;

use crate::cli::OutputFormat;

/// Run the checks and print the report. Returns the process exit code.
pub fn cmd_check(
    config_path: &Path,
    ids: &[String],
    format: OutputFormat,
    jobs: usize,
    show_passing: bool,
) -> Result<i32> {
    let config = super::load_config(config_path)?;
    let registry = config.registry()?;
    let source = config.source(Path::new("."));

    let quiet = ui::is_quiet();
    if format == OutputFormat::Text && !quiet {
        println!(
            "Checking {} in {}...",
            ui::format::plural(
                if ids.is_empty() {
                    registry.len()
                } else {
                    ids.iter().collect::<HashSet<_>>().len()
                },
                "document"
            ),
            source.root().display().to_string().cyan()
        );
    }

    let options = RunOptions {
        ids: ids.to_vec(),
        jobs,
    };
    let report = run_checks(&registry, &source, &options);

    match format {
        OutputFormat::Json => println!("{}", formatters::format_json_report(&report)?),
        OutputFormat::Text if quiet => {
            if !report.is_success() {
                println!("{}", formatters::format_text_report(&report, false));
            }
        }
        OutputFormat::Text => println!("{}", formatters::format_text_report(&report, show_passing)),
    }

    Ok(report.exit_status())
}
