//! `droidlint list`: show the document registry.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use droidlint::rule::RuleKind;
use droidlint::ui::{self, format};

pub fn cmd_list(config_path: &Path, category: Option<&str>, show_rules: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let registry = config.registry()?;

    if let Some(category) = category {
        if !registry.categories().any(|set| set.category() == category) {
            anyhow::bail!("Unknown category '{}'", category);
        }
    }

    let mut shown = 0;
    for doc in registry.documents() {
        if category.is_some_and(|c| c != doc.category) {
            continue;
        }
        shown += 1;
        println!(
            "{}  {}  {}",
            ui::colors::identifier(&doc.id),
            format!("[{}]", doc.category).dimmed(),
            doc.path
        );

        if show_rules {
            for rule in registry.rule_set_for(&doc.id)?.rules() {
                println!("    {} {}", rule.name(), describe(rule.kind()).dimmed());
            }
        }
    }

    if !ui::is_quiet() {
        println!();
        println!(
            "{}",
            ui::colors::secondary(&format::plural(shown, "document"))
        );
    }

    Ok(())
}

fn describe(kind: &RuleKind) -> String {
    match kind {
        RuleKind::ContainsAll(needles) => format!("contains all of {}", quoted(needles)),
        RuleKind::ContainsAny(needles) => format!("contains one of {}", quoted(needles)),
        RuleKind::StartsWith(marker) => format!("opens and closes with '{}'", marker),
        RuleKind::MinLength(n) => format!("at least {} characters", n),
    }
}

fn quoted(needles: &[String]) -> String {
    needles
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&RuleKind::ContainsAny(vec![
                "## Process".to_string(),
                "## The Process".to_string()
            ])),
            "contains one of '## Process', '## The Process'"
        );
        assert_eq!(describe(&RuleKind::MinLength(500)), "at least 500 characters");
    }
}
