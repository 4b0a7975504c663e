//! Spec-file naming
//!
//! A source file's spec file lives in the output directory under the
//! source's name with `.spec` inserted before the extension:
//! `src/parse.js` with output `test` becomes `test/parse.spec.js`.

use std::path::{Path, PathBuf};

/// Derive the spec-file path for `source` inside `out_dir`.
///
/// Sources without an extension get `.spec` appended instead.
pub fn spec_path(source: &Path, out_dir: &Path) -> PathBuf {
    let file_name = match (source.file_stem(), source.extension()) {
        (Some(stem), Some(ext)) => {
            format!("{}.spec.{}", stem.to_string_lossy(), ext.to_string_lossy())
        }
        _ => format!(
            "{}.spec",
            source
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default()
        ),
    };
    out_dir.join(file_name)
}

/// Whether a path names a spec file by the convention above.
///
/// Spec files are outputs; feeding one back in as a source would merge a
/// spec into its own spec, so callers refuse or filter them.
pub fn is_spec_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.contains(".spec.") || name.ends_with(".spec")
}
