//! Utility functions shared by the benchmark runner and the CLI.
//!
//! ## Modules
//!
//! - [`format`] - Size, rate and duration formatting
//! - [`progress`] - Progress bars (no-op without the `progress` feature)

pub mod format;
pub mod progress;

pub use format::*;
