//! Sync and check command implementations
//!
//! Sync merges test blocks from source files into spec files; check is
//! the read-only variant that reports what a sync would change.

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use blot_core::{FileReport, MergeEngine, MergeOptions, Outcome};

use crate::discover::discover_sources;
use crate::error::{CliError, Result};

/// Counters accumulated over one run
#[derive(Debug, Default)]
struct Summary {
    created: usize,
    updated: usize,
    unchanged: usize,
    no_blocks: usize,
    cleaned: usize,
    replaced: usize,
    appended: usize,
    skipped_markers: usize,
}

impl Summary {
    fn record(&mut self, report: &FileReport) {
        match report.outcome {
            Outcome::Created => self.created += 1,
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::NoBlocks => self.no_blocks += 1,
        }
        if report.cleaned_source.is_some() {
            self.cleaned += 1;
        }
        self.replaced += report.stats.replaced;
        self.appended += report.stats.appended_new + report.stats.fallback_appends;
        self.skipped_markers += report.skipped + report.spec_skipped;
    }

    fn spec_changes(&self) -> usize {
        self.created + self.updated
    }
}

fn build_engine(output: &Path, options: MergeOptions, scaffold: Option<&Path>) -> MergeEngine {
    let engine = MergeEngine::new(output, options);
    match scaffold {
        Some(path) => engine.with_scaffold_file(path),
        None => engine,
    }
}

/// Run the sync command
///
/// Merges test blocks from every matched source into its spec file.
pub fn run_sync(
    globs: &[String],
    output: &Path,
    ignore: &[String],
    dry_run: bool,
    clean: bool,
    scaffold: Option<&Path>,
) -> Result<()> {
    if dry_run {
        println!(
            "{} Previewing test-block merge (nothing will be written)...",
            "=>".blue().bold()
        );
    } else {
        println!(
            "{} Merging test blocks into {}...",
            "=>".blue().bold(),
            output.display().to_string().cyan()
        );
    }

    let sources = discover_sources(globs, ignore)?;
    if sources.is_empty() {
        println!("{} No source files matched.", "OK".yellow().bold());
        return Ok(());
    }

    let options = MergeOptions {
        clean_source: clean,
        dry_run,
    };
    let engine = build_engine(output, options, scaffold);

    let mut summary = Summary::default();
    for source in &sources {
        let report = engine.merge_file(source)?;
        summary.record(&report);
        print_report_line(&report);
    }

    println!();
    if dry_run {
        if summary.spec_changes() == 0 && summary.cleaned == 0 {
            println!(
                "{} Nothing to do. All spec files are up to date.",
                "OK".green().bold()
            );
        } else {
            println!(
                "{} Dry run: {} spec file(s) would change.",
                "OK".green().bold(),
                summary.spec_changes()
            );
            println!("Run {} to apply.", "blot sync".cyan());
        }
    } else if summary.spec_changes() == 0 && summary.cleaned == 0 {
        println!("{} Already merged. No changes needed.", "OK".green().bold());
    } else {
        println!(
            "{} Merge complete: {} created, {} updated, {} unchanged.",
            "OK".green().bold(),
            summary.created,
            summary.updated,
            summary.unchanged
        );
        println!(
            "   {} {} block(s) replaced, {} appended",
            "+".green(),
            summary.replaced,
            summary.appended
        );
        if summary.cleaned > 0 {
            println!("   {} {} source(s) cleaned", "+".green(), summary.cleaned);
        }
    }
    if summary.skipped_markers > 0 {
        println!(
            "{} {} malformed marker(s) skipped.",
            "WARN".yellow().bold(),
            summary.skipped_markers
        );
    }

    Ok(())
}

/// Run the check command
///
/// Performs the merge in memory only and fails when any spec file would
/// change, printing a line diff of the pending update.
pub fn run_check(
    globs: &[String],
    output: &Path,
    ignore: &[String],
    clean: bool,
    scaffold: Option<&Path>,
) -> Result<()> {
    println!("{} Checking spec files...", "=>".blue().bold());

    let sources = discover_sources(globs, ignore)?;
    if sources.is_empty() {
        println!("{} No source files matched.", "OK".yellow().bold());
        return Ok(());
    }

    let options = MergeOptions {
        clean_source: clean,
        dry_run: true,
    };
    let engine = build_engine(output, options, scaffold);

    let mut stale = 0usize;
    for source in &sources {
        let report = engine.merge_file(source)?;
        if !report.changed() {
            continue;
        }
        stale += 1;

        let spec = report.spec.display().to_string();
        match report.outcome {
            Outcome::Created => {
                println!("   {} {} {}", "!".red(), spec.cyan(), "missing".red())
            }
            Outcome::Updated => {
                println!("   {} {} {}", "!".red(), spec.cyan(), "out of date".yellow())
            }
            Outcome::Unchanged | Outcome::NoBlocks => {}
        }

        if report.would_write() {
            if let Some(merged) = &report.merged {
                print_spec_diff(report.previous.as_deref().unwrap_or(""), merged);
            }
        }
        if report.cleaned_source.is_some() {
            println!(
                "   {} {} still carries merged blocks",
                "!".red(),
                report.source.display().to_string().cyan()
            );
        }
    }

    if stale == 0 {
        println!("{} All spec files are up to date.", "OK".green().bold());
        Ok(())
    } else {
        println!();
        println!("Run {} to update.", "blot sync".cyan());
        Err(CliError::user(format!("{stale} spec file(s) need syncing")))
    }
}

/// Print one per-file result line
fn print_report_line(report: &FileReport) {
    let source = report.source.display().to_string();
    let cleaned = if report.cleaned_source.is_some() {
        " (source cleaned)".dimmed().to_string()
    } else {
        String::new()
    };

    match report.outcome {
        Outcome::Created => println!(
            "   {} {} {} {}{}",
            "+".green(),
            source.cyan(),
            "->".dimmed(),
            report.spec.display().to_string().cyan(),
            cleaned
        ),
        Outcome::Updated => println!(
            "   {} {} {} {}{}",
            "~".yellow(),
            source.cyan(),
            "->".dimmed(),
            report.spec.display().to_string().cyan(),
            cleaned
        ),
        Outcome::Unchanged => println!(
            "   {} {} {}{}",
            "=".dimmed(),
            source.cyan(),
            "up to date".dimmed(),
            cleaned
        ),
        Outcome::NoBlocks => println!(
            "   {} {} {}",
            "-".dimmed(),
            source.cyan(),
            "no test blocks".dimmed()
        ),
    }

    let skipped = report.skipped + report.spec_skipped;
    if skipped > 0 {
        println!("     {} {} malformed marker(s) skipped", "!".red(), skipped);
    }
}

/// Print the changed lines between the spec file on disk and the merge
/// result. Unchanged lines are elided.
fn print_spec_diff(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    for change in diff.iter_all_changes() {
        let line = change.value();
        match change.tag() {
            ChangeTag::Delete => print!("     {} {}", "-".red(), line.red()),
            ChangeTag::Insert => print!("     {} {}", "+".green(), line.green()),
            ChangeTag::Equal => continue,
        }
        if !line.ends_with('\n') {
            println!();
        }
    }
}
