//! Synthetic data sets
//!
//! Values are drawn uniformly from the domain, keys are sampled from the
//! drawn values (so every lookup should hit), then values are sorted.

use super::config::BenchConfig;
use crate::index::LutKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt::Display;

/// Element types the generator can produce
pub trait RandomValue: LutKey + Display {
    fn random(rng: &mut StdRng, config: &BenchConfig) -> Self;

    /// Total order used for sorting
    fn total_order(&self, other: &Self) -> Ordering;
}

impl RandomValue for u32 {
    fn random(rng: &mut StdRng, _config: &BenchConfig) -> Self {
        rng.r#gen()
    }

    fn total_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl RandomValue for i32 {
    fn random(rng: &mut StdRng, _config: &BenchConfig) -> Self {
        rng.r#gen()
    }

    fn total_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl RandomValue for f32 {
    fn random(rng: &mut StdRng, config: &BenchConfig) -> Self {
        let [lo, hi] = config.float_range;
        rng.gen_range(lo..hi)
    }

    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Sorted values plus the keys to look up
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    pub values: Vec<T>,
    pub keys: Vec<T>,
}

impl<T: RandomValue> Dataset<T> {
    /// Generate a data set, deterministic for a given seed
    pub fn generate(config: &BenchConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);

        let mut values: Vec<T> = (0..config.num_values)
            .map(|_| T::random(&mut rng, config))
            .collect();

        let keys: Vec<T> = if values.is_empty() {
            Vec::new()
        } else {
            (0..config.num_keys)
                .map(|_| values[rng.gen_range(0..values.len())])
                .collect()
        };

        sort_values(&mut values);
        Self { values, keys }
    }
}

/// Sort ascending in parallel
pub fn sort_values<T: RandomValue>(values: &mut [T]) {
    values.par_sort_unstable_by(|a, b| a.total_order(b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            num_values: 5_000,
            num_keys: 500,
            ..Default::default()
        }
    }

    #[test]
    fn test_sorted_and_sized() {
        let data: Dataset<i32> = Dataset::generate(&small_config());
        assert_eq!(data.values.len(), 5_000);
        assert_eq!(data.keys.len(), 500);
        assert!(data.values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_keys_are_present() {
        let data: Dataset<u32> = Dataset::generate(&small_config());
        for key in &data.keys {
            assert!(data.values.binary_search(key).is_ok());
        }
    }

    #[test]
    fn test_floats_within_range() {
        let data: Dataset<f32> = Dataset::generate(&small_config());
        assert!(data.values.iter().all(|v| (-999.0..999.0).contains(v)));
        assert!(data.values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_deterministic() {
        let a: Dataset<u32> = Dataset::generate(&small_config());
        let b: Dataset<u32> = Dataset::generate(&small_config());
        assert_eq!(a.values, b.values);
        assert_eq!(a.keys, b.keys);
    }

    #[test]
    fn test_empty() {
        let config = BenchConfig {
            num_values: 0,
            num_keys: 10,
            ..Default::default()
        };
        let data: Dataset<f32> = Dataset::generate(&config);
        assert!(data.values.is_empty());
        assert!(data.keys.is_empty());
    }
}
