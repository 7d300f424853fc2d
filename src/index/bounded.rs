//! Bounded binary search
//!
//! Exact-match search confined to a closed index interval of a sorted slice.

use std::ops::RangeInclusive;

/// Find the lowest index `i` in `bounds` with `values[i] == key`
///
/// `bounds` is a closed interval. Empty or inverted intervals, and
/// intervals that start past the end of `values`, yield `None` without
/// touching the slice. An interval ending past the slice is clamped.
///
/// The span is narrowed by a length counter: the start only advances when
/// the probed element is strictly less than `key`, so the surviving
/// candidate is the first element not less than `key`.
pub fn bounded_search<T: PartialOrd>(
    values: &[T],
    bounds: RangeInclusive<usize>,
    key: &T,
) -> Option<usize> {
    let (left, right) = bounds.into_inner();
    let right = right.min(values.len().checked_sub(1)?);
    if left > right {
        return None;
    }

    let mut first = left;
    let mut len = right - left;

    while len > 0 {
        let half = len >> 1;
        let middle = first + half;

        if values[middle] < *key {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    (values[first] == *key).then_some(first)
}

/// Lower-bound search over the whole slice using the standard library
pub fn reference_search<T: PartialOrd>(values: &[T], key: &T) -> Option<usize> {
    let idx = values.partition_point(|v| v < key);
    (idx < values.len() && values[idx] == *key).then_some(idx)
}
