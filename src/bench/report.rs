//! Report types produced by the benchmark runner

use super::config::BenchConfig;
use crate::index::{LutStats, SearchStrategy, ValueDomain};
use serde::Serialize;

/// Timing of one strategy over every key of a run
#[derive(Debug, Clone, Serialize)]
pub struct StrategyTiming {
    pub strategy: SearchStrategy,
    pub elapsed_ms: f64,
    pub searches_per_sec: f64,
    /// Sum of returned indices, identical across strategies
    pub checksum: u64,
}

/// One (domain, table width) combination
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub domain: ValueDomain,
    pub num_values: usize,
    pub num_keys: usize,
    pub build_ms: f64,
    pub table: LutStats,
    pub strategies: Vec<StrategyTiming>,
}

impl RunReport {
    pub fn timing(&self, strategy: SearchStrategy) -> Option<&StrategyTiming> {
        self.strategies.iter().find(|t| t.strategy == strategy)
    }

    /// Lookup-table throughput relative to the reference search
    pub fn lut_speedup(&self) -> Option<f64> {
        let reference = self.timing(SearchStrategy::Reference)?;
        let lut = self.timing(SearchStrategy::Lut)?;
        (lut.elapsed_ms > 0.0).then(|| reference.elapsed_ms / lut.elapsed_ms)
    }
}

/// Full sweep
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub runs: Vec<RunReport>,
}

/// Table shape over a generated data set
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub domain: ValueDomain,
    pub num_values: usize,
    pub build_ms: f64,
    pub table: LutStats,
}

/// Outcome of looking up one key with every strategy
#[derive(Debug, Clone, Serialize)]
pub struct KeyLookup {
    pub key: String,
    pub mapped: u32,
    pub bucket: usize,
    /// Closed candidate interval selected by the table
    pub candidate: Option<(usize, usize)>,
    pub results: Vec<(SearchStrategy, Option<usize>)>,
}

impl KeyLookup {
    /// Whether every strategy returned the same result
    pub fn agrees(&self) -> bool {
        self.results.windows(2).all(|w| w[0].1 == w[1].1)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub domain: ValueDomain,
    pub num_values: usize,
    pub bits: u32,
    pub lookups: Vec<KeyLookup>,
}
