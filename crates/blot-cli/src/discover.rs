//! Source-file discovery
//!
//! Expands the command line's glob patterns into a sorted, de-duplicated
//! list of source files. Spec files are filtered out here so a run never
//! feeds its own output back in as a source.

use std::path::PathBuf;

use glob::Pattern;

use blot_fs::is_spec_file;

use crate::error::{CliError, Result};

/// Globs used when the command line names none.
pub const DEFAULT_GLOBS: &[&str] = &["**/*.js", "**/*.jsx"];

/// Expand `globs` (or the defaults) into source files.
///
/// Ignore patterns are matched against the full path of every hit, so
/// `**/vendor/**` excludes a directory anywhere in the tree. Only plain
/// files survive: directories, spec files, and ignored paths are dropped.
/// Overlapping globs yield each file once.
pub fn discover_sources(globs: &[String], ignore: &[String]) -> Result<Vec<PathBuf>> {
    let ignore = compile_patterns(ignore)?;

    let requested: Vec<&str> = if globs.is_empty() {
        DEFAULT_GLOBS.to_vec()
    } else {
        globs.iter().map(String::as_str).collect()
    };

    let mut files = Vec::new();
    for pattern in requested {
        let paths = glob::glob(pattern).map_err(|e| CliError::pattern(pattern, e))?;
        for entry in paths {
            let path = entry.map_err(|e| CliError::Io(e.into_error()))?;
            if !path.is_file() || is_spec_file(&path) {
                continue;
            }
            if ignore.iter().any(|p| p.matches_path(&path)) {
                continue;
            }
            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn compile_patterns(raw: &[String]) -> Result<Vec<Pattern>> {
    raw.iter()
        .map(|p| Pattern::new(p).map_err(|e| CliError::pattern(p, e)))
        .collect()
}
