//! blot CLI
//!
//! The command-line interface for merging inline test blocks into spec
//! files.

mod cli;
mod commands;
mod discover;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

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

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Execute command
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Test-block merging CLI", "blot".green().bold());
            println!();
            println!("Run {} for available commands.", "blot --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            globs,
            output,
            ignore,
            dry_run,
            clean,
            scaffold,
        } => commands::run_sync(&globs, &output, &ignore, dry_run, clean, scaffold.as_deref()),
        Commands::Check {
            globs,
            output,
            ignore,
            clean,
            scaffold,
        } => commands::run_check(&globs, &output, &ignore, clean, scaffold.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "blot", &mut std::io::stdout());
            Ok(())
        }
    }
}
