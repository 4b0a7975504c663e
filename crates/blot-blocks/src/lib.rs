//! Test-block extraction and merge reconciliation for blot
//!
//! Source files carry inline test blocks between line-leading comment
//! markers:
//!
//! ```text
//! // TEST {parses empty input}
//! t.deepEqual(parse(''), []);
//! // END
//! ```
//!
//! This crate finds those blocks, matches them by label against the blocks
//! already present in a companion spec file, and computes the spec file's
//! new text without disturbing anything outside the matched spans. All
//! functions here are pure and synchronous; reading and writing the files
//! involved is the caller's concern.

pub mod block;
pub mod extract;
pub mod merge;

pub use block::{Block, Extraction, Update};
pub use extract::extract_blocks;
pub use merge::{ApplyStats, apply, apply_counted, reconcile, strip_blocks};
