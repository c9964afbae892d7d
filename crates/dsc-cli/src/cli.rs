//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// EDK2 Utility Script Tool - add, delete and check entries in the
/// [Components] section of a DSC file
#[derive(Parser, Debug)]
#[command(name = "dscfile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load editor settings from a TOML, JSON or YAML file
    #[arg(short, long, global = true, env = "DSCFILE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check entry: list matching lines, failing if there are none
    ///
    /// Examples:
    ///   dscfile check Board.dsc MdeModulePkg/Core/Dxe/DxeMain.inf
    ///   dscfile check Board.dsc ShellPkg/ --json
    Check {
        /// DSC file to inspect
        file: PathBuf,

        /// Entry prefix to look for (leading whitespace is ignored)
        entry: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Add entry at the end of the section
    ///
    /// The previous file is kept as <file>.bak.
    Add {
        /// DSC file to edit
        file: PathBuf,

        /// Entry to add
        entry: String,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Delete every entry starting with the given string
    ///
    /// The previous file is kept as <file>.bak.
    Delete {
        /// DSC file to edit
        file: PathBuf,

        /// Entry prefix to delete
        entry: String,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
