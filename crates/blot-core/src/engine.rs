//! MergeEngine implementation
//!
//! The MergeEngine drives one source file through the whole pipeline:
//! read the source, extract its test blocks, reconcile them against the
//! spec file, apply the updates, and write the results back to disk.

use std::path::{Path, PathBuf};

use blot_blocks::{ApplyStats, apply_counted, extract_blocks, reconcile, strip_blocks};
use blot_fs::{ScaffoldLoader, is_spec_file, read_text, read_text_optional, spec_path, write_text};

use crate::report::{FileReport, Outcome};
use crate::{Error, Result};

/// Options for merge operations
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// If true, strip merged blocks out of the source file afterwards.
    pub clean_source: bool,
    /// If true, compute everything but write nothing to disk.
    pub dry_run: bool,
}

/// Engine for merging test blocks into spec files
///
/// One engine is built per run and handles each source file in turn:
///
/// - **merge_file**: extract, reconcile, apply, and write for one source
///
/// The scaffold is loaded lazily on the first spec file that needs to be
/// created, so a run that only updates existing files never reads it.
pub struct MergeEngine {
    /// Directory that receives spec files
    out_dir: PathBuf,
    /// Behavior switches for this run
    options: MergeOptions,
    /// Scaffold text for newly created spec files
    scaffold: ScaffoldLoader,
}

impl MergeEngine {
    /// Create an engine writing spec files under `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>, options: MergeOptions) -> Self {
        Self {
            out_dir: out_dir.into(),
            options,
            scaffold: ScaffoldLoader::builtin(),
        }
    }

    /// Use scaffold text from a file instead of the built-in preamble.
    pub fn with_scaffold_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.scaffold = ScaffoldLoader::from_file(path);
        self
    }

    /// The spec-file path this engine derives for `source`.
    pub fn spec_path_for(&self, source: &Path) -> PathBuf {
        spec_path(source, &self.out_dir)
    }

    /// Merge the test blocks of one source file into its spec file.
    ///
    /// Rejects sources that are themselves spec files. A source without
    /// complete blocks produces a [`Outcome::NoBlocks`] report and the
    /// spec file is not touched or even read. In dry-run mode the report
    /// carries the text that would have been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is a spec file, or on any read or
    /// write failure.
    pub fn merge_file(&self, source: &Path) -> Result<FileReport> {
        if is_spec_file(source) {
            return Err(Error::SpecFileSource {
                path: source.to_path_buf(),
            });
        }

        let source_text = read_text(source)?;
        let spec = self.spec_path_for(source);

        let extraction = extract_blocks(&source_text);
        if extraction.skipped > 0 {
            tracing::warn!(
                source = %source.display(),
                skipped = extraction.skipped,
                "skipped malformed test markers"
            );
        }

        if extraction.blocks.is_empty() {
            return Ok(FileReport {
                source: source.to_path_buf(),
                spec,
                outcome: Outcome::NoBlocks,
                blocks: 0,
                skipped: extraction.skipped,
                spec_skipped: 0,
                stats: ApplyStats::default(),
                previous: None,
                merged: None,
                cleaned_source: None,
            });
        }

        let previous = read_text_optional(&spec)?;
        let (target_blocks, spec_skipped) = match previous.as_deref() {
            Some(text) => {
                let target = extract_blocks(text);
                (target.blocks, target.skipped)
            }
            None => (Vec::new(), 0),
        };
        if spec_skipped > 0 {
            tracing::warn!(
                spec = %spec.display(),
                skipped = spec_skipped,
                "skipped malformed test markers"
            );
        }

        let updates = reconcile(&extraction.blocks, &target_blocks);
        // The scaffold seeds brand new spec files only; update runs never
        // read it.
        let scaffold = match previous.as_deref() {
            None => self.scaffold.load()?,
            Some(_) => "",
        };
        let (merged, stats) = apply_counted(&updates, previous.as_deref(), scaffold);

        let outcome = match previous.as_deref() {
            None => Outcome::Created,
            Some(prev) if prev == merged => Outcome::Unchanged,
            Some(_) => Outcome::Updated,
        };

        let cleaned_source = self.options.clean_source.then(|| {
            let spans: Vec<_> = extraction.blocks.iter().map(|b| b.span.clone()).collect();
            strip_blocks(&source_text, &spans)
        });

        if !self.options.dry_run {
            // Spec before source: blocks must be on disk in the spec file
            // before they disappear from the source.
            if matches!(outcome, Outcome::Created | Outcome::Updated) {
                write_text(&spec, &merged)?;
            }
            if let Some(cleaned) = &cleaned_source {
                write_text(source, cleaned)?;
            }
        }

        tracing::debug!(
            source = %source.display(),
            spec = %spec.display(),
            %outcome,
            blocks = extraction.blocks.len(),
            replaced = stats.replaced,
            appended = stats.appended_new,
            fallbacks = stats.fallback_appends,
            "merged source file"
        );

        Ok(FileReport {
            source: source.to_path_buf(),
            spec,
            outcome,
            blocks: extraction.blocks.len(),
            skipped: extraction.skipped,
            spec_skipped,
            stats,
            previous,
            merged: Some(merged),
            cleaned_source,
        })
    }
}
