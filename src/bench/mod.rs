//! Benchmark harness
//!
//! Generates sorted data sets, sweeps value domains and table widths, and
//! times the three search strategies against each other.
//!
//! - `config`: sweep parameters, loadable from JSON
//! - `dataset`: seeded synthetic values and keys
//! - `runner`: the timed sweep plus single-table and single-key inspection
//! - `report`: serializable results

pub mod config;
pub mod dataset;
pub mod report;
pub mod runner;

pub use config::BenchConfig;
pub use dataset::{Dataset, RandomValue};
pub use report::{BenchReport, KeyLookup, LookupReport, RunReport, StrategyTiming, TableReport};
pub use runner::{describe_table, lookup_keys, run_benchmark};
