//! Lookup-table accelerated exact-match search
//!
//! ## Architecture
//!
//! - `mapping`: order-preserving `u32` keys for `u32`, `i32` and `f32`
//! - `lut`: one-pass bucket-start table construction
//! - `bounded`: binary search confined to a closed index interval
//! - `search`: the [`SearchIndex`] façade tying the three together
//! - `types`: table width and strategy types

pub mod bounded;
pub mod lut;
pub mod mapping;
pub mod search;
pub mod types;

pub use bounded::{bounded_search, reference_search};
pub use lut::{LookupTable, LutStats};
pub use mapping::{map_value, LutKey, MappedKey, ValueDomain};
pub use search::SearchIndex;
pub use types::{LutBits, SearchStrategy, MAX_LUT_BITS, MIN_LUT_BITS};
