//! Error types for blot-core

use std::path::PathBuf;

/// Result type for blot-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in blot-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A spec file was passed in as a source file
    #[error("Refusing to use spec file as a source: {path}")]
    SpecFileSource { path: PathBuf },

    /// Filesystem error from blot-fs
    #[error(transparent)]
    Fs(#[from] blot_fs::Error),
}
