//! Filesystem operations for blot
//!
//! Safe reads and atomic writes, spec-file path derivation, and scaffold
//! loading. Everything that touches disk lives here; the merge logic in
//! `blot-blocks` stays pure.

pub mod error;
pub mod io;
pub mod scaffold;
pub mod spec_path;

pub use error::{Error, Result};
pub use io::{read_text, read_text_optional, write_atomic, write_text};
pub use scaffold::{DEFAULT_SCAFFOLD, ScaffoldLoader};
pub use spec_path::{is_spec_file, spec_path};
