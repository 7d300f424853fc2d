//! # lutsearch - Lookup-table accelerated binary search
//!
//! Exact-match lookup in large sorted arrays of 32-bit ordinal values
//! (`u32`, `i32`, `f32`). A table indexed by the top `B` bits of a key's
//! order-preserving bit pattern narrows the search to a small interval,
//! which a bounded binary search then resolves. This replaces most of the
//! cache-missing probes of a full binary search.
//!
//! ## Architecture
//!
//! - [`index`] - Key mapping, table construction, bounded search, and the
//!   [`index::SearchIndex`] façade
//! - [`bench`] - Synthetic data sets and the timed strategy sweep
//! - [`output`] - Terminal and JSON report formatting
//! - [`utils`] - Formatting helpers and progress bars
//!
//! ## Quick Start
//!
//! ```
//! use lutsearch::index::SearchIndex;
//!
//! let values = [2u32, 4, 4, 7, 9, 12];
//! let index = SearchIndex::new(&values, 2).unwrap();
//!
//! assert_eq!(index.lut_search(7), Some(3));
//! assert_eq!(index.lut_search(4), Some(1));
//! assert_eq!(index.lut_search(5), None);
//! ```
//!
//! Only `u32`, `i32` and `f32` can be indexed:
//!
//! ```compile_fail
//! use lutsearch::index::SearchIndex;
//!
//! let values = [1u64, 2, 3];
//! let index = SearchIndex::new(&values, 8);
//! ```
//!
//! ## Trade-offs
//!
//! Wider tables shrink the residual search interval but cost
//! `(2^B + 1) * size_of::<usize>()` bytes and `O(N + 2^B)` build time.
//! The width never affects results, only speed.

pub mod bench;
pub mod index;
pub mod output;
pub mod utils;
