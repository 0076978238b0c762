//! # droidlint - structural checks for droid and command documentation
//!
//! droidlint checks that documentation entries ("droids", "skills" and the
//! "commands" that invoke them) keep the shape they are expected to have:
//! a frontmatter block, the mandatory section headings, references to related
//! entries, and enough content to be useful. It is meant to run as a gate
//! after adding or editing entries.
//!
//! ## Overview
//!
//! A run resolves the configured documents, reads their text, evaluates the
//! rule set of each document's category against it, and aggregates every
//! rule outcome into a [`report::Report`] whose exit status is `0` only when
//! every rule passed on every document.
//!
//! ## Modules
//!
//! - [`rule`] - Rules, rule sets and their evaluation
//! - [`validator`] - Applying a rule set to one document
//! - [`registry`] - Document lookup and the document source abstraction
//! - [`report`] - Result aggregation and exit status
//! - [`run`] - The end-to-end validation pipeline
//! - [`config`] - Loading rule sets and documents from `.droidlint/config.md`
//!
//! ## Example
//!
//! ```
//! use droidlint::registry::{DocumentRef, MemorySource, Registry};
//! use droidlint::rule::{Rule, RuleSet};
//! use droidlint::run::{run_checks, RunOptions};
//!
//! let rules = RuleSet::new(
//!     "droid",
//!     vec![
//!         Rule::starts_with("frontmatter", "---"),
//!         Rule::contains_any("process", ["## Process", "## The Process"]),
//!     ],
//! );
//! let registry = Registry::new(
//!     vec![rules],
//!     vec![DocumentRef::new("tdd", "droids/tdd.md", "droid")],
//! )
//! .unwrap();
//! let source = MemorySource::new().with("droids/tdd.md", "---\nid: tdd\n---\n## The Process\n");
//!
//! let report = run_checks(&registry, &source, &RunOptions::default());
//! assert_eq!(report.exit_status(), 0);
//! ```

pub mod config;
pub mod error;
pub mod formatters;
pub mod registry;
pub mod report;
pub mod rule;
pub mod run;
pub mod ui;
pub mod validator;

pub use error::{ConfigError, DocumentNotFound, RegistryError};
pub use registry::{DocumentRef, DocumentSource, FsSource, MemorySource, Registration, Registry};
pub use report::{exit_status, Report, ValidationResult};
pub use rule::{Placeholders, Rule, RuleKind, RuleSet};
