//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// blot - Merge inline test blocks into spec files
#[derive(Parser, Debug)]
#[command(name = "blot")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge test blocks from source files into spec files
    ///
    /// Scans the matched sources for `// TEST {label}` ... `// END`
    /// blocks and merges them into spec files in the output directory.
    ///
    /// Examples:
    ///   blot sync                       # All .js/.jsx files
    ///   blot sync 'src/**/*.js'         # Explicit glob
    ///   blot sync --dry-run             # Preview without writing
    ///   blot sync --clean               # Also strip blocks from sources
    Sync {
        /// Glob patterns selecting source files
        globs: Vec<String>,

        /// Directory that receives spec files
        #[arg(short, long, default_value = "test")]
        output: PathBuf,

        /// Glob patterns to exclude from the scan
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Preview changes without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Strip merged blocks out of the source files
        #[arg(long)]
        clean: bool,

        /// File with scaffold text for newly created spec files
        #[arg(long)]
        scaffold: Option<PathBuf>,
    },

    /// Check whether spec files are up to date
    ///
    /// Runs the same merge as sync without writing, prints a diff for
    /// every spec file that would change, and exits non-zero if any
    /// would. Suited for CI.
    Check {
        /// Glob patterns selecting source files
        globs: Vec<String>,

        /// Directory that receives spec files
        #[arg(short, long, default_value = "test")]
        output: PathBuf,

        /// Glob patterns to exclude from the scan
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Also require sources to be free of merged blocks
        #[arg(long)]
        clean: bool,

        /// File with scaffold text for newly created spec files
        #[arg(long)]
        scaffold: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   blot completions bash > ~/.local/share/bash-completion/completions/blot
    ///   blot completions zsh > ~/.zfunc/_blot
    ///   blot completions fish > ~/.config/fish/completions/blot.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
