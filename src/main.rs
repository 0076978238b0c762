//! CLI entry point for droidlint.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.quiet {
        std::env::set_var("DROIDLINT_QUIET", "1");
    }

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            1
        }
    };

    std::process::exit(code);
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch a command, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check {
            ids,
            format,
            jobs,
            show_passing,
        } => cmd::check::cmd_check(&cli.config, &ids, format, jobs, show_passing),
        Commands::List { category, rules } => {
            cmd::list::cmd_list(&cli.config, category.as_deref(), rules).map(|_| 0)
        }
        Commands::Init { name, force } => cmd::init::cmd_init(&cli.config, name, force).map(|_| 0),
        Commands::Version { build_info } => cmd::util::cmd_version(build_info).map(|_| 0),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell).map(|_| 0),
    }
}
