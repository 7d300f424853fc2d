//! Benchmark configuration
//!
//! Loaded from a JSON file when one is given, then overridden by CLI flags.

use crate::index::{LutBits, ValueDomain};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a benchmark sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of sorted values to generate per domain
    #[serde(default = "default_num_values")]
    pub num_values: usize,

    /// Number of keys to look up, each sampled from the values
    #[serde(default = "default_num_keys")]
    pub num_keys: usize,

    /// Seed for the data set generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Table widths to sweep
    #[serde(default = "default_lut_bits")]
    pub lut_bits: Vec<LutBits>,

    /// Value domains to sweep
    #[serde(default = "default_domains")]
    pub domains: Vec<ValueDomain>,

    /// Half-open range floats are drawn from
    #[serde(default = "default_float_range")]
    pub float_range: [f32; 2],

    /// Check every hit against its key
    #[serde(default = "default_verify")]
    pub verify: bool,
}

fn default_num_values() -> usize {
    1_000_000
}

fn default_num_keys() -> usize {
    1_000_000
}

fn default_seed() -> u64 {
    303
}

fn default_lut_bits() -> Vec<LutBits> {
    [8, 16, 24]
        .into_iter()
        .filter_map(|b| LutBits::new(b).ok())
        .collect()
}

fn default_domains() -> Vec<ValueDomain> {
    ValueDomain::ALL.to_vec()
}

fn default_float_range() -> [f32; 2] {
    [-999.0, 999.0]
}

fn default_verify() -> bool {
    true
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_values: default_num_values(),
            num_keys: default_num_keys(),
            seed: default_seed(),
            lut_bits: default_lut_bits(),
            domains: default_domains(),
            float_range: default_float_range(),
            verify: default_verify(),
        }
    }
}

impl BenchConfig {
    /// Load a config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: BenchConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Drop key sampling, for callers that only inspect the values
    pub fn without_keys(self) -> Self {
        Self { num_keys: 0, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.lut_bits.is_empty(), "no lookup table widths configured");
        ensure!(!self.domains.is_empty(), "no value domains configured");
        ensure!(
            self.num_keys == 0 || self.num_values > 0,
            "cannot sample {} keys from an empty data set",
            self.num_keys
        );

        let [lo, hi] = self.float_range;
        ensure!(
            lo.is_finite() && hi.is_finite() && lo < hi,
            "invalid float range [{}, {})",
            lo,
            hi
        );
        Ok(())
    }
}
