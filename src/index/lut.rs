//! Lookup table construction
//!
//! Builds, in one pass over a sorted slice, a table mapping the top `B` bits
//! of a mapped key (the bucket id) to the first index whose bucket is not
//! below it. Consecutive entries delimit the candidate interval of a bucket.
//!
//! Buckets after the last observed one (`end`) hold no data; they all point
//! at the start of the final interval and their interval runs to `N - 1`.

use super::mapping::{LutKey, MappedKey};
use super::types::LutBits;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Bucket-start table over a sorted slice
#[derive(Debug, Clone)]
pub struct LookupTable {
    bits: LutBits,
    /// `2^B + 1` non-decreasing start indices
    entries: Vec<usize>,
    /// Highest bucket id observed in the data
    end: usize,
    /// Number of values the table was built over
    len: usize,
}

/// Shape of a built table
#[derive(Debug, Clone, Serialize)]
pub struct LutStats {
    pub bits: u32,
    pub entries: usize,
    pub memory_bytes: usize,
    pub end_bucket: usize,
    pub occupied_buckets: usize,
    pub largest_span: usize,
    pub mean_span: f64,
}

impl LookupTable {
    /// Build the table for `values`, which must be sorted ascending
    ///
    /// Runs in `O(N + 2^B)`. An empty slice produces an all-zero table.
    pub fn build<T: LutKey>(values: &[T], bits: LutBits) -> Self {
        let mut entries = vec![0usize; bits.bucket_count() + 1];
        let shift = bits.shift();
        let bucket = |v: &T| (v.mapped() >> shift) as usize;

        let Some(first) = values.first() else {
            return Self { bits, entries, end: 0, len: 0 };
        };

        // Buckets up to and including the first element's all start at 0.
        let mut thresh = bucket(first);
        let mut last = 0usize;

        for (i, next) in values.iter().enumerate().skip(1) {
            let next_thresh = bucket(next);
            if next_thresh > thresh {
                last = i;
                entries[thresh + 1..=next_thresh].fill(last);
                thresh = next_thresh;
            }
        }

        entries[thresh..].fill(last);

        Self {
            bits,
            entries,
            end: thresh,
            len: values.len(),
        }
    }

    #[inline]
    pub fn bits(&self) -> LutBits {
        self.bits
    }

    #[inline]
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Highest bucket id observed while building
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Bucket id of a mapped key
    #[inline]
    pub fn bucket_of(&self, mapped: MappedKey) -> usize {
        (mapped >> self.bits.shift()) as usize
    }

    /// Closed candidate interval for a bucket
    ///
    /// Returns `None` when the bucket cannot contain any element: empty
    /// buckets between observed ones, buckets below the first element's
    /// bucket, and every bucket of an empty table.
    pub fn interval(&self, bucket: usize) -> Option<RangeInclusive<usize>> {
        let last_index = self.len.checked_sub(1)?;
        let start = *self.entries.get(bucket)?;
        let end = if bucket + 1 > self.end {
            last_index
        } else {
            self.entries[bucket + 1].checked_sub(1)?
        };
        (start <= end).then_some(start..=end)
    }

    pub fn memory_bytes(&self) -> usize {
        self.entries.len() * std::mem::size_of::<usize>()
    }

    pub fn stats(&self) -> LutStats {
        let mut occupied = 0usize;
        let mut largest = 0usize;
        let mut total = 0usize;

        for range in (0..=self.end).filter_map(|b| self.interval(b)) {
            let span = range.end() - range.start() + 1;
            occupied += 1;
            total += span;
            largest = largest.max(span);
        }

        LutStats {
            bits: self.bits.get(),
            entries: self.entries.len(),
            memory_bytes: self.memory_bytes(),
            end_bucket: self.end,
            occupied_buckets: occupied,
            largest_span: largest,
            mean_span: if occupied == 0 {
                0.0
            } else {
                total as f64 / occupied as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(b: u32) -> LutBits {
        LutBits::new(b).unwrap()
    }

    #[test]
    fn test_table_length() {
        let table = LookupTable::build(&[1u32, 2, 3], bits(4));
        assert_eq!(table.entries().len(), 17);
    }

    #[test]
    fn test_small_values_share_bucket_zero() {
        let values = [2u32, 4, 4, 7, 9, 12];
        let table = LookupTable::build(&values, bits(2));
        assert_eq!(table.entries(), &[0, 0, 0, 0, 0]);
        assert_eq!(table.end(), 0);
        assert_eq!(table.interval(0), Some(0..=5));
    }

    #[test]
    fn test_bucket_starts() {
        // top two bits: 0, 0, 1, 3, 3
        let values = [1u32, 2, 0x4000_0000, 0xC000_0000, 0xC000_0001];
        let table = LookupTable::build(&values, bits(2));
        assert_eq!(table.entries(), &[0, 2, 3, 3, 3]);
        assert_eq!(table.end(), 3);
        assert_eq!(table.interval(0), Some(0..=1));
        assert_eq!(table.interval(1), Some(2..=2));
        assert_eq!(table.interval(2), None);
        assert_eq!(table.interval(3), Some(3..=4));
    }

    #[test]
    fn test_first_element_outside_bucket_zero() {
        let values = [0x8000_0000u32, 0x8000_0001, 0xC000_0000];
        let table = LookupTable::build(&values, bits(2));
        assert_eq!(table.entries(), &[0, 0, 0, 2, 2]);
        assert_eq!(table.interval(0), None);
        assert_eq!(table.interval(1), None);
        assert_eq!(table.interval(2), Some(0..=1));
        assert_eq!(table.interval(3), Some(2..=2));
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [u32; 0] = [];
        let table = LookupTable::build(&empty, bits(3));
        assert!(table.entries().iter().all(|&e| e == 0));
        assert_eq!(table.interval(0), None);

        let single = LookupTable::build(&[0xFFFF_FFFFu32], bits(3));
        assert!(single.entries().iter().all(|&e| e == 0));
        assert_eq!(single.end(), 7);
        assert_eq!(single.interval(7), Some(0..=0));
        assert_eq!(single.interval(3), None);
    }

    #[test]
    fn test_monotonic_and_covering() {
        let values: Vec<i32> = (-500..500).map(|i| i * 4_000_000).collect();
        let table = LookupTable::build(&values, bits(6));
        let entries = table.entries();

        for pair in entries.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(entries.iter().all(|&e| e < values.len()));

        for (j, v) in values.iter().enumerate() {
            let range = table.interval(table.bucket_of(v.mapped())).unwrap();
            assert!(range.contains(&j), "index {} not in {:?}", j, range);
        }
    }

    #[test]
    fn test_stats() {
        let values = [1u32, 2, 0x4000_0000, 0xC000_0000, 0xC000_0001];
        let stats = LookupTable::build(&values, bits(2)).stats();
        assert_eq!(stats.entries, 5);
        assert_eq!(stats.occupied_buckets, 3);
        assert_eq!(stats.largest_span, 2);
        assert_eq!(stats.end_bucket, 3);
        assert!((stats.mean_span - 5.0 / 3.0).abs() < 1e-9);
    }
}
