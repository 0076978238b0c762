//! Command module structure for droidlint CLI

use anyhow::{Context, Result};
use std::path::Path;

use droidlint::config::Config;

pub mod check;
pub mod init;
pub mod list;
pub mod util;

/// Load the config at `path`, pointing at `droidlint init` when it is missing.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "No config at {}. Run `droidlint init` first.",
            path.display()
        );
    }
    Config::load_from(path).with_context(|| format!("Invalid config {}", path.display()))
}
