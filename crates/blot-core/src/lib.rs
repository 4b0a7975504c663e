//! Merge engine for blot
//!
//! This crate coordinates the pure block logic in `blot-blocks` with the
//! disk operations in `blot-fs`:
//!
//! - **MergeEngine**: drives one source file through extract, reconcile,
//!   apply, and write
//! - **MergeOptions**: clean-source and dry-run switches
//! - **FileReport**: what happened to one source file, with counters
//!
//! # Architecture
//!
//! `blot-core` sits between the leaf crates and the CLI:
//!
//! ```text
//!         CLI
//!          |
//!      blot-core
//!          |
//!     +----+-----+
//!     |          |
//! blot-blocks blot-fs
//! ```
//!
//! The engine is synchronous and handles one file at a time; a run over
//! many files is a loop in the caller.

pub mod engine;
pub mod error;
pub mod report;

pub use engine::{MergeEngine, MergeOptions};
pub use error::{Error, Result};
pub use report::{FileReport, Outcome};
