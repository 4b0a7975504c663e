//! Per-file merge reports

use std::fmt;
use std::path::PathBuf;

use blot_blocks::ApplyStats;

/// What the merge did to a source file's spec file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The spec file did not exist and was created from the scaffold.
    Created,
    /// The spec file existed and its content changed.
    Updated,
    /// The spec file existed and the merge produced identical content.
    Unchanged,
    /// The source held no complete test blocks; nothing was merged.
    NoBlocks,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Created => "created",
            Outcome::Updated => "updated",
            Outcome::Unchanged => "up to date",
            Outcome::NoBlocks => "no test blocks",
        };
        write!(f, "{text}")
    }
}

/// Report from merging one source file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The source file that was scanned
    pub source: PathBuf,
    /// The spec file the blocks merge into
    pub spec: PathBuf,
    /// What happened to the spec file
    pub outcome: Outcome,
    /// Complete blocks found in the source
    pub blocks: usize,
    /// Malformed markers skipped while scanning the source
    pub skipped: usize,
    /// Malformed markers skipped while scanning the existing spec file
    pub spec_skipped: usize,
    /// How each update was applied
    pub stats: ApplyStats,
    /// Spec text before the merge, when the file existed
    pub previous: Option<String>,
    /// Spec text after the merge, absent when nothing was merged
    pub merged: Option<String>,
    /// Source text with blocks stripped, set only when cleaning applied
    pub cleaned_source: Option<String>,
}

impl FileReport {
    /// Whether the merge produced new spec content to write.
    pub fn would_write(&self) -> bool {
        matches!(self.outcome, Outcome::Created | Outcome::Updated)
    }

    /// Whether anything on disk differs from what the merge produced,
    /// counting a pending source cleanup as a difference.
    pub fn changed(&self) -> bool {
        self.would_write() || self.cleaned_source.is_some()
    }
}
