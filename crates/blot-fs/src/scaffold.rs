//! Scaffold text for fresh spec files
//!
//! When a source merges into a spec file that does not exist yet, the new
//! file is seeded with scaffold text so the appended blocks land in a
//! runnable harness. The built-in scaffold suits ava-style suites; a
//! custom scaffold can be loaded from a file instead.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::{Result, io};

/// Preamble written at the top of every newly created spec file.
pub const DEFAULT_SCAFFOLD: &str = "'use strict';\nimport test from 'ava';\n";

/// Lazily loaded scaffold text, read at most once per run.
#[derive(Debug, Default)]
pub struct ScaffoldLoader {
    source: Option<PathBuf>,
    cached: OnceLock<String>,
}

impl ScaffoldLoader {
    /// Loader for the built-in scaffold.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loader that reads the scaffold from `path` on first use.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            cached: OnceLock::new(),
        }
    }

    /// The scaffold text. Reads the backing file on the first call; later
    /// calls return the cached text even if the file has changed.
    pub fn load(&self) -> Result<&str> {
        if let Some(text) = self.cached.get() {
            return Ok(text);
        }
        let text = match &self.source {
            Some(path) => io::read_text(path)?,
            None => DEFAULT_SCAFFOLD.to_string(),
        };
        Ok(self.cached.get_or_init(|| text))
    }
}
