//! Search index façade
//!
//! [`SearchIndex`] borrows a caller-owned sorted slice and owns the lookup
//! table built over it. It cannot outlive the slice, and the slice cannot be
//! mutated while the index exists. A changed array needs a new index.
//!
//! All three strategies return the same result for every key: `None`, or the
//! lowest index holding a value equal to the key.

use super::bounded::{bounded_search, reference_search};
use super::lut::{LookupTable, LutStats};
use super::mapping::LutKey;
use super::types::{LutBits, SearchStrategy};
use anyhow::Result;
use std::ops::RangeInclusive;

/// Lookup-table accelerated search over a sorted slice
///
/// The slice must be sorted ascending. This is not checked; an unsorted
/// slice gives unspecified (but memory-safe) results.
#[derive(Debug, Clone)]
pub struct SearchIndex<'a, T: LutKey> {
    values: &'a [T],
    table: LookupTable,
}

impl<'a, T: LutKey> SearchIndex<'a, T> {
    /// Build an index with a table of width `bits`
    ///
    /// Fails if `bits` is outside `1..=31`.
    pub fn new(values: &'a [T], bits: u32) -> Result<Self> {
        Ok(Self::with_bits(values, LutBits::new(bits)?))
    }

    pub fn with_bits(values: &'a [T], bits: LutBits) -> Self {
        Self {
            values,
            table: LookupTable::build(values, bits),
        }
    }

    #[inline]
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn bits(&self) -> LutBits {
        self.table.bits()
    }

    #[inline]
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    pub fn stats(&self) -> LutStats {
        self.table.stats()
    }

    /// Standard library lower bound over the whole slice
    pub fn reference_search(&self, key: T) -> Option<usize> {
        reference_search(self.values, &key)
    }

    /// Bounded binary search over `[0, N-1]`
    pub fn plain_bounded_search(&self, key: T) -> Option<usize> {
        let last = self.values.len().checked_sub(1)?;
        bounded_search(self.values, 0..=last, &key)
    }

    /// Bounded binary search over the interval the table selects for `key`
    #[inline]
    pub fn lut_search(&self, key: T) -> Option<usize> {
        let range = self.candidate_range(key)?;
        bounded_search(self.values, range, &key)
    }

    /// Candidate interval for `key`, or `None` if its bucket holds no values
    pub fn candidate_range(&self, key: T) -> Option<RangeInclusive<usize>> {
        self.table.interval(self.table.bucket_of(key.mapped()))
    }

    pub fn search(&self, strategy: SearchStrategy, key: T) -> Option<usize> {
        match strategy {
            SearchStrategy::Reference => self.reference_search(key),
            SearchStrategy::PlainBounded => self.plain_bounded_search(key),
            SearchStrategy::Lut => self.lut_search(key),
        }
    }
}
