//! Benchmark sweep
//!
//! For every configured domain a data set is generated once, then for every
//! table width an index is built and each strategy resolves all keys. Every
//! key was sampled from the values, so any miss or mismatch is an error.

use super::config::BenchConfig;
use super::dataset::{Dataset, RandomValue};
use super::report::{BenchReport, KeyLookup, LookupReport, RunReport, StrategyTiming, TableReport};
use crate::index::{LutBits, LutKey, SearchIndex, SearchStrategy, ValueDomain};
use crate::utils::duration_ms;
use crate::utils::progress::{run_bar, spinner, ProgressBar};
use anyhow::{bail, Context, Result};
use std::hint::black_box;
use std::str::FromStr;
use std::time::Instant;

/// Run the full sweep described by `config`
pub fn run_benchmark(config: &BenchConfig, show_progress: bool) -> Result<BenchReport> {
    config.validate()?;

    let total = (config.domains.len() * config.lut_bits.len()) as u64;
    let bar = run_bar(show_progress, total);
    let mut runs = Vec::with_capacity(total as usize);

    for &domain in &config.domains {
        let domain_runs = match domain {
            ValueDomain::Unsigned32 => run_domain::<u32>(config, show_progress, &bar)?,
            ValueDomain::Signed32 => run_domain::<i32>(config, show_progress, &bar)?,
            ValueDomain::Float32 => run_domain::<f32>(config, show_progress, &bar)?,
        };
        runs.extend(domain_runs);
    }

    bar.finish_and_clear();

    Ok(BenchReport {
        config: config.clone(),
        runs,
    })
}

fn generate<T: RandomValue>(config: &BenchConfig, show_progress: bool) -> Dataset<T> {
    let pb = spinner(
        show_progress,
        &format!(
            "Generating {} {} values...",
            config.num_values,
            T::DOMAIN.name()
        ),
    );
    let data = Dataset::generate(config);
    pb.finish_and_clear();
    data
}

fn run_domain<T: RandomValue>(
    config: &BenchConfig,
    show_progress: bool,
    bar: &ProgressBar,
) -> Result<Vec<RunReport>> {
    let domain = T::DOMAIN;
    bar.suspend(|| eprintln!("lutsearch: benchmarking {}", domain.description()));

    let data: Dataset<T> = generate(config, show_progress);
    let mut runs = Vec::with_capacity(config.lut_bits.len());

    for &bits in &config.lut_bits {
        bar.set_message(format!("{} / {} bits", domain, bits));
        let run = run_once(&data, bits, config.verify)
            .with_context(|| format!("{} benchmark with {}-bit table failed", domain, bits))?;
        runs.push(run);
        bar.inc(1);
    }

    Ok(runs)
}

fn run_once<T: RandomValue>(data: &Dataset<T>, bits: LutBits, verify: bool) -> Result<RunReport> {
    let start = Instant::now();
    let index = SearchIndex::with_bits(&data.values, bits);
    let build_ms = duration_ms(start.elapsed());

    let mut strategies = Vec::with_capacity(SearchStrategy::ALL.len());
    for strategy in SearchStrategy::ALL {
        strategies.push(time_strategy(&index, &data.keys, strategy, verify)?);
    }

    if let Some(first) = strategies.first() {
        for other in &strategies[1..] {
            if other.checksum != first.checksum {
                bail!(
                    "checksum mismatch: {} = {}, {} = {}",
                    first.strategy,
                    first.checksum,
                    other.strategy,
                    other.checksum
                );
            }
        }
    }

    Ok(RunReport {
        domain: T::DOMAIN,
        num_values: data.values.len(),
        num_keys: data.keys.len(),
        build_ms,
        table: index.stats(),
        strategies,
    })
}

fn time_strategy<T: RandomValue>(
    index: &SearchIndex<'_, T>,
    keys: &[T],
    strategy: SearchStrategy,
    verify: bool,
) -> Result<StrategyTiming> {
    let values = index.values();
    let mut checksum = 0u64;

    let start = Instant::now();
    for &key in keys {
        match index.search(strategy, black_box(key)) {
            Some(idx) => {
                if verify && values[idx] != key {
                    bail!(
                        "{} returned index {} holding {} for key {}",
                        strategy,
                        idx,
                        values[idx],
                        key
                    );
                }
                checksum = checksum.wrapping_add(idx as u64);
            }
            None if verify => bail!("{} did not find present key {}", strategy, key),
            None => {}
        }
    }
    let elapsed_ms = duration_ms(start.elapsed());

    Ok(StrategyTiming {
        strategy,
        elapsed_ms,
        searches_per_sec: if elapsed_ms > 0.0 {
            keys.len() as f64 / (elapsed_ms / 1000.0)
        } else {
            0.0
        },
        checksum: black_box(checksum),
    })
}

/// Build one index over a generated data set and describe its table
pub fn describe_table(
    config: &BenchConfig,
    domain: ValueDomain,
    bits: LutBits,
    show_progress: bool,
) -> Result<TableReport> {
    match domain {
        ValueDomain::Unsigned32 => table_report::<u32>(config, bits, show_progress),
        ValueDomain::Signed32 => table_report::<i32>(config, bits, show_progress),
        ValueDomain::Float32 => table_report::<f32>(config, bits, show_progress),
    }
}

fn table_report<T: RandomValue>(
    config: &BenchConfig,
    bits: LutBits,
    show_progress: bool,
) -> Result<TableReport> {
    let data: Dataset<T> = generate(config, show_progress);

    let start = Instant::now();
    let index = SearchIndex::with_bits(&data.values, bits);
    let build_ms = duration_ms(start.elapsed());

    Ok(TableReport {
        domain: T::DOMAIN,
        num_values: data.values.len(),
        build_ms,
        table: index.stats(),
    })
}

/// Look up `keys` (given as text) in a generated data set with every strategy
pub fn lookup_keys(
    config: &BenchConfig,
    domain: ValueDomain,
    bits: LutBits,
    keys: &[String],
    show_progress: bool,
) -> Result<LookupReport> {
    match domain {
        ValueDomain::Unsigned32 => lookup::<u32>(config, bits, keys, show_progress),
        ValueDomain::Signed32 => lookup::<i32>(config, bits, keys, show_progress),
        ValueDomain::Float32 => lookup::<f32>(config, bits, keys, show_progress),
    }
}

fn lookup<T>(
    config: &BenchConfig,
    bits: LutBits,
    keys: &[String],
    show_progress: bool,
) -> Result<LookupReport>
where
    T: RandomValue + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed = keys
        .iter()
        .map(|k| {
            k.parse::<T>()
                .with_context(|| format!("invalid {} key '{}'", T::DOMAIN, k))
        })
        .collect::<Result<Vec<T>>>()?;

    let data: Dataset<T> = generate(config, show_progress);
    let index = SearchIndex::with_bits(&data.values, bits);

    let lookups = keys
        .iter()
        .zip(parsed)
        .map(|(text, key)| {
            let mapped = key.mapped();
            KeyLookup {
                key: text.clone(),
                mapped,
                bucket: index.table().bucket_of(mapped),
                candidate: index
                    .candidate_range(key)
                    .map(|r| (*r.start(), *r.end())),
                results: SearchStrategy::ALL
                    .iter()
                    .map(|&s| (s, index.search(s, key)))
                    .collect(),
            }
        })
        .collect();

    Ok(LookupReport {
        domain: T::DOMAIN,
        num_values: data.values.len(),
        bits: bits.get(),
        lookups,
    })
}
