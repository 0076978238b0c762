//! `droidlint init`: write a starter config.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use droidlint::config::{starter_config, Config};

pub fn cmd_init(config_path: &Path, name: Option<String>, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = name
        .or_else(detect_project_name)
        .unwrap_or_else(|| "docs".to_string());
    let content = starter_config(&name);

    // never write a config we could not load back
    Config::parse(&content).context("Starter config failed to parse")?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote {} for project '{}'",
        "Done!".green(),
        config_path.display(),
        name
    );
    println!("Next: run {}", "droidlint check".cyan());
    Ok(())
}

/// Current directory name.
fn detect_project_name() -> Option<String> {
    std::env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
}
