//! Command implementations for blot-cli

pub mod sync;

pub use sync::{run_check, run_sync};
