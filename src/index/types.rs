//! Core type definitions for the search index

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted table width in bits
pub const MIN_LUT_BITS: u32 = 1;

/// Largest accepted table width in bits
pub const MAX_LUT_BITS: u32 = 31;

/// Width of a lookup table in bits
///
/// A table of width `B` has `2^B + 1` entries and buckets keys by the
/// top `B` bits of their mapped value. Always within `1..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LutBits(u32);

impl LutBits {
    pub fn new(bits: u32) -> Result<Self> {
        ensure!(
            (MIN_LUT_BITS..=MAX_LUT_BITS).contains(&bits),
            "invalid lookup table width {}: must be in {}..={}",
            bits,
            MIN_LUT_BITS,
            MAX_LUT_BITS
        );
        Ok(Self(bits))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of buckets (`2^B`)
    #[inline]
    pub fn bucket_count(self) -> usize {
        1usize << self.0
    }

    /// Right shift that extracts the bucket id from a mapped key
    #[inline]
    pub fn shift(self) -> u32 {
        32 - self.0
    }
}

impl TryFrom<u32> for LutBits {
    type Error = anyhow::Error;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<LutBits> for u32 {
    fn from(bits: LutBits) -> u32 {
        bits.0
    }
}

impl fmt::Display for LutBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three interchangeable ways to resolve a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Library lower-bound search over the whole array
    Reference,
    /// Bounded binary search over `[0, N-1]`
    PlainBounded,
    /// Bounded binary search over the interval selected by the lookup table
    Lut,
}

impl SearchStrategy {
    /// Benchmark run order: bounded, then reference, then lookup table
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::PlainBounded,
        SearchStrategy::Reference,
        SearchStrategy::Lut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchStrategy::Reference => "Standard binary search",
            SearchStrategy::PlainBounded => "Bounded binary search",
            SearchStrategy::Lut => "Lookup binary search",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchStrategy::Reference => "reference",
            SearchStrategy::PlainBounded => "plain_bounded",
            SearchStrategy::Lut => "lut",
        })
    }
}
