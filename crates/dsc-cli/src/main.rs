//! dscfile CLI
//!
//! Checks, adds and deletes entries in the `[Components]` section of EDK2
//! platform description (DSC) files.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command, cli.config.as_deref())
}

/// Log to stderr, at `warn` unless `RUST_LOG` or `--verbose` says otherwise.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn execute_command(cmd: Commands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Commands::Check { file, entry, json } => {
            let config = commands::load_config(config_path)?;
            commands::run_check(&file, &entry, &config, json)
        }
        Commands::Add {
            file,
            entry,
            dry_run,
            json,
        } => {
            let config = commands::load_config(config_path)?;
            commands::run_add(&file, &entry, &config, dry_run, json)
        }
        Commands::Delete {
            file,
            entry,
            dry_run,
            json,
        } => {
            let config = commands::load_config(config_path)?;
            commands::run_delete(&file, &entry, &config, dry_run, json)
        }
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
