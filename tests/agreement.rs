//! Integration tests checking that the three search strategies agree.
//!
//! Every strategy must return `None` for absent keys and the lowest index
//! of an equal element for present keys, for any sorted input and any
//! table width.

use lutsearch::index::{LutKey, SearchIndex, SearchStrategy};
use proptest::prelude::*;

fn results<T: LutKey>(index: &SearchIndex<'_, T>, key: T) -> [Option<usize>; 3] {
    SearchStrategy::ALL.map(|s| index.search(s, key))
}

/// Assert agreement and the lowest-index contract for one key
fn check_key<T: LutKey>(index: &SearchIndex<'_, T>, key: T) {
    let [first, rest @ ..] = results(index, key);
    for other in rest {
        assert_eq!(first, other, "strategies disagree for key {:?}", key);
    }

    let values = index.values();
    match first {
        Some(i) => {
            assert!(values[i] == key);
            assert!(i == 0 || values[i - 1] < key, "index {} is not the lowest", i);
        }
        None => assert!(!values.iter().any(|v| *v == key)),
    }
}

fn check_table_invariants<T: LutKey>(index: &SearchIndex<'_, T>) {
    let table = index.table();
    let entries = table.entries();
    assert_eq!(entries.len(), index.bits().bucket_count() + 1);
    assert!(entries.windows(2).all(|w| w[0] <= w[1]));

    if let Some(last) = index.len().checked_sub(1) {
        assert!(entries.iter().all(|&e| e <= last));
    }

    for (j, v) in index.values().iter().enumerate() {
        let bucket = table.bucket_of(v.mapped());
        assert!(entries[bucket] <= j);
        let range = table.interval(bucket).expect("occupied bucket has an interval");
        assert!(range.contains(&j));
    }
}

#[test]
fn test_duplicate_run_returns_lowest_index() {
    let values = [1u32, 3, 3, 3, 5];
    for bits in [1, 2, 8, 16, 20] {
        let index = SearchIndex::new(&values, bits).unwrap();
        assert_eq!(results(&index, 3), [Some(1); 3]);
    }
}

#[test]
fn test_small_table_scenario() {
    let values = [2u32, 4, 4, 7, 9, 12];
    let index = SearchIndex::new(&values, 2).unwrap();
    assert_eq!(results(&index, 7), [Some(3); 3]);
    assert_eq!(results(&index, 5), [None; 3]);
    assert_eq!(results(&index, 4), [Some(1); 3]);
}

#[test]
fn test_empty_array_never_matches() {
    let values: Vec<i32> = Vec::new();
    let index = SearchIndex::new(&values, 10).unwrap();
    for key in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(results(&index, key), [None; 3]);
    }
}

#[test]
fn test_dense_unsigned_sweep() {
    let mut values: Vec<u32> = (0..4096u32).map(|i| i.wrapping_mul(1_048_573)).collect();
    values.sort_unstable();

    for bits in [1, 4, 12, 20] {
        let index = SearchIndex::new(&values, bits).unwrap();
        check_table_invariants(&index);
        for &v in values.iter().step_by(7) {
            check_key(&index, v);
            check_key(&index, v.wrapping_add(1));
        }
    }
}

#[test]
fn test_extreme_signed_values() {
    let values = [i32::MIN, i32::MIN, -1, 0, 0, 0, i32::MAX];
    let index = SearchIndex::new(&values, 5).unwrap();
    check_table_invariants(&index);
    assert_eq!(results(&index, i32::MIN), [Some(0); 3]);
    assert_eq!(results(&index, 0), [Some(3); 3]);
    assert_eq!(results(&index, i32::MAX), [Some(6); 3]);
    assert_eq!(results(&index, 1), [None; 3]);
}

fn sorted<T: PartialOrd>(mut values: Vec<T>) -> Vec<T> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values
}

fn finite_float() -> impl Strategy<Value = f32> {
    prop_oneof![
        (-1000.0f32..1000.0f32),
        any::<f32>().prop_filter("finite", |f| f.is_finite()),
    ]
    .prop_map(|f| if f == 0.0 { 0.0 } else { f })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_unsigned_agree(
        values in prop::collection::vec(any::<u32>(), 0..300),
        probes in prop::collection::vec(any::<u32>(), 0..20),
        bits in 1u32..=16,
    ) {
        let values = sorted(values);
        let index = SearchIndex::new(&values, bits).unwrap();
        check_table_invariants(&index);
        for &v in values.iter().chain(probes.iter()) {
            check_key(&index, v);
        }
    }

    #[test]
    fn prop_signed_agree_with_duplicates(
        values in prop::collection::vec(-50i32..50, 0..200),
        probes in prop::collection::vec(any::<i32>(), 0..20),
        bits in 1u32..=16,
    ) {
        let values = sorted(values);
        let index = SearchIndex::new(&values, bits).unwrap();
        check_table_invariants(&index);
        for &v in values.iter().chain(probes.iter()) {
            check_key(&index, v);
        }
        for key in -55..55 {
            check_key(&index, key);
        }
    }

    #[test]
    fn prop_float_agree(
        values in prop::collection::vec(finite_float(), 0..300),
        probes in prop::collection::vec(finite_float(), 0..20),
        bits in 1u32..=16,
    ) {
        let values = sorted(values);
        let index = SearchIndex::new(&values, bits).unwrap();
        check_table_invariants(&index);
        for &v in values.iter().chain(probes.iter()) {
            check_key(&index, v);
        }
    }
}
