use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Default config used by [`TestHarness::new`]: one droid and its command.
pub const DEFAULT_CONFIG: &str = r###"---
project:
  name: harness
  root: .factory
headings:
  usage: ["## Usage", "## When to Use", "## When to Run"]
  process: ["## Process", "## The Process"]
categories:
  droid:
    dir: droids
    rules:
      - name: frontmatter
        starts_with: "---"
      - name: overview
        contains_all: ["## Overview"]
      - name: usage
        section: usage
      - name: process
        section: process
      - name: substantial
        min_length: 200
  command:
    dir: commands
    rules:
      - name: non-empty
        min_length: 1
      - name: mentions-droid
        contains_any: ["{droid_title}"]
documents:
  - id: root-cause-tracing
    category: droid
    rules:
      - name: phases
        contains_all: ["Error Analysis", "Backward Tracing", "Source Identification"]
  - id: cmd/root-cause-tracing
    category: command
    droid: root-cause-tracing
---

# Harness config
"###;

/// TestHarness provides an isolated project with a droidlint config and a
/// `.factory/` document tree.
pub struct TestHarness {
    pub dir: TempDir,
    pub factory_dir: PathBuf,
    pub config_path: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness with [`DEFAULT_CONFIG`] and empty droid/command dirs.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CONFIG)
    }

    /// Creates a harness with custom config content.
    pub fn with_config(config_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        let factory_dir = base_path.join(".factory");
        let config_path = base_path.join(".droidlint/config.md");

        fs::create_dir_all(factory_dir.join("droids")).expect("Failed to create droids dir");
        fs::create_dir_all(factory_dir.join("commands")).expect("Failed to create commands dir");
        fs::create_dir_all(base_path.join(".droidlint")).expect("Failed to create config dir");
        fs::write(&config_path, config_content).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            factory_dir,
            config_path,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_droidlint")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a document under `.factory/`.
    pub fn write_doc(&self, rel_path: &str, content: &str) {
        let path = self.factory_dir.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create doc dir");
        }
        fs::write(path, content).expect("Failed to write document");
    }

    /// Executes the droidlint binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("DROIDLINT_QUIET")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run droidlint")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
