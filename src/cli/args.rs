//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// dockalias - short aliases for compose project chores
///
/// Runs the named alias (see `dockalias help`), or the default alias
/// when none is given.
#[derive(Parser, Debug)]
#[command(name = "dockalias")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Alias or built-in command to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCKALIAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .dockalias.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,

    /// Run commands (and look for .dockalias.toml) from this directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Print command lines instead of running them
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all aliases with their descriptions
    Help,

    /// List aliases
    List(ListArgs),

    /// Create a project-local .dockalias.toml
    Init(InitArgs),

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },

    /// Run an alias
    #[command(external_subcommand)]
    Alias(Vec<String>),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing .dockalias.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Aligned name and description columns
    Table,
    /// JSON output
    Json,
    /// Names only, one per line
    Plain,
}
