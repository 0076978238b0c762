//! Default values and the starter config written by `droidlint init`.

use std::fmt::Write;

macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_root, String, ".factory".to_string());

/// Minimum trimmed length for a droid document in the starter config.
pub const STARTER_DROID_MIN_LENGTH: usize = 500;

/// A droid in the starter config, with the command that invokes it and
/// whatever it must contain beyond its category schema.
#[derive(Debug, Clone, Copy)]
pub struct StarterDroid {
    pub id: &'static str,
    pub command: &'static str,
    /// Title when title-casing the id gets it wrong.
    pub title: Option<&'static str>,
    /// Headings required on top of the category's.
    pub sections: &'static [&'static str],
    /// Process phase names the droid must describe.
    pub phases: &'static [&'static str],
    /// Other droids it must reference.
    pub related: &'static [&'static str],
}

const fn droid(id: &'static str, command: &'static str) -> StarterDroid {
    StarterDroid {
        id,
        command,
        title: None,
        sections: &[],
        phases: &[],
        related: &[],
    }
}

impl StarterDroid {
    const fn titled(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    const fn sections(mut self, sections: &'static [&'static str]) -> Self {
        self.sections = sections;
        self
    }

    const fn phases(mut self, phases: &'static [&'static str]) -> Self {
        self.phases = phases;
        self
    }

    const fn related(mut self, related: &'static [&'static str]) -> Self {
        self.related = related;
        self
    }
}

/// Every droid of the droidpowers layout, paired with its command.
pub const STARTER_DROIDS: &[StarterDroid] = &[
    droid("test-driven-development", "tdd"),
    droid("systematic-debugging", "debug"),
    droid("brainstorming", "brainstorm"),
    droid("verification-before-completion", "verify"),
    droid("condition-based-waiting", "condition-wait"),
    droid("defense-in-depth", "defense-in-depth"),
    droid("writing-plans", "plan"),
    droid("executing-plans", "execute"),
    droid("requesting-code-review", "review"),
    droid("receiving-code-review", "handle-review"),
    droid("using-git-worktrees", "worktree"),
    droid("subagent-driven-development", "subdev"),
    droid("root-cause-tracing", "root-cause-tracing")
        .sections(&["## Integration"])
        .phases(&["Error Analysis", "Backward Tracing", "Source Identification"])
        .related(&["systematic-debugging"]),
    droid("finishing-a-development-branch", "finish-branch")
        .titled("Finishing a Development Branch")
        .sections(&["## Integration"])
        .phases(&["Completion Assessment", "Integration Options", "Next Steps"]),
    droid("dispatching-parallel-agents", "parallel")
        .sections(&["## Requirements"])
        .phases(&["Problem Analysis", "Parallel Dispatch", "Integration"]),
    droid("testing-anti-patterns", "anti-patterns")
        .titled("Testing Anti-Patterns")
        .sections(&["## Prevention Checklist", "## Integration"])
        .phases(&[
            "Mock Behavior Testing",
            "Production Code Pollution",
            "Mocking Without Understanding",
            "Test-Only Methods",
        ])
        .related(&[
            "test-driven-development",
            "verification-before-completion",
            "systematic-debugging",
        ]),
    droid("testing-skills-with-subagents", "test-skills")
        .sections(&["## RED-GREEN-REFACTOR for Skills", "## Testing Process"])
        .phases(&["RED:", "GREEN:", "REFACTOR:"]),
    droid("sharing-skills", "share")
        .sections(&["## Integration"])
        .phases(&["Preparation", "Repository Operations", "Pull Request"])
        .related(&["writing-skills", "testing-skills-with-subagents"]),
    droid("writing-skills", "write-droid"),
    droid("using-droids", "droids"),
    droid("skill-checker", "skill-checker"),
];

const STARTER_HEADER: &str = r###"headings:
  overview: ["## Overview", "## Description"]
  usage: ["## Usage", "## When to Use", "## When to Run"]
  process:
    - "## Process"
    - "## The Process"
    - "## Contribution Process"
    - "## Testing Process"
    - "## Common Anti-Patterns"
    - "## RED-GREEN-REFACTOR"
    - "## How it Works"
categories:
  droid:
    dir: droids
    rules:
      - name: frontmatter
        starts_with: "---"
      - name: metadata
        contains_all: ["id: {id}", "title: {title}", "category:"]
      - name: title
        contains_all: ["# {title}"]
      - name: overview
        section: overview
      - name: usage
        section: usage
      - name: process
        section: process
      - name: substantial
        min_length: "###;

const STARTER_COMMANDS: &str = r###"  command:
    dir: commands
    rules:
      - name: non-empty
        min_length: 1
      - name: droid-field
        contains_all: ["droid: {droid}"]
      - name: mentions-droid
        contains_any: ["{droid_title}", "{droid}"]
documents:
"###;

/// Render the starter config for a project called `name`.
pub fn starter_config(name: &str) -> String {
    let mut out = String::new();
    out.push_str("---\nproject:\n");
    let _ = writeln!(out, "  name: {}", yaml_str(name));
    out.push_str("  root: .factory\n");
    out.push_str(STARTER_HEADER);
    let _ = writeln!(out, "{}", STARTER_DROID_MIN_LENGTH);
    out.push_str(STARTER_COMMANDS);

    for droid in STARTER_DROIDS {
        let _ = writeln!(out, "  - id: {}\n    category: droid", droid.id);
        if let Some(title) = droid.title {
            let _ = writeln!(out, "    title: {}", yaml_str(title));
        }

        let rules = [
            ("sections", droid.sections),
            ("phases", droid.phases),
            ("related", droid.related),
        ];
        if rules.iter().any(|(_, needles)| !needles.is_empty()) {
            out.push_str("    rules:\n");
        }
        for (rule, needles) in rules.iter().filter(|(_, n)| !n.is_empty()) {
            let _ = writeln!(out, "      - name: {}\n        contains_all:", rule);
            for needle in *needles {
                let _ = writeln!(out, "          - {}", yaml_str(needle));
            }
        }

        let _ = writeln!(
            out,
            "  - id: cmd/{}\n    category: command\n    droid: {}",
            droid.command, droid.id
        );
    }

    out.push_str("---\n\n# droidlint\n\nRun `droidlint check` after adding or editing droids and commands.\n");
    out
}

/// Double-quoted YAML scalar.
fn yaml_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
