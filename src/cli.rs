//! CLI argument definitions for droidlint.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "droidlint")]
#[command(version)]
#[command(about = "Structural checks for droid and command documentation", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    droidlint init              Write a starter .droidlint/config.md\n    droidlint check             Check every registered document\n    droidlint check tdd         Check selected documents only"
)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH", default_value = droidlint::config::CONFIG_PATH)]
    pub config: PathBuf,

    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate documents against their category's rule set
    ///
    /// Exits 0 when every rule passes on every checked document, 1 otherwise.
    Check {
        /// Document ids to check (default: all registered documents)
        ids: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Number of worker threads
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,
        /// Also list rules that passed
        #[arg(long)]
        show_passing: bool,
    },
    /// List registered documents and their rule sets
    List {
        /// Only list documents of this category
        #[arg(long)]
        category: Option<String>,
        /// Print each document's bound rules
        #[arg(long)]
        rules: bool,
    },
    /// Write a starter config for the droidpowers layout
    Init {
        /// Project name (default: current directory name)
        #[arg(long)]
        name: Option<String>,
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
    /// Show version information
    Version {
        /// Also show the commit and build date
        #[arg(long)]
        build_info: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
