//! Report formatting for the terminal

use crate::bench::{BenchReport, LookupReport, RunReport, TableReport};
use crate::index::LutStats;
use crate::utils::{format_ms, format_rate, format_size};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const RULE: &str = "=============================================================================";

fn stdout(color: bool) -> StandardStream {
    StandardStream::stdout(if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

/// Print any report as pretty JSON
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

fn heading(out: &mut impl WriteColor, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", text)?;
    out.reset()
}

fn label(out: &mut impl WriteColor, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{:<18}", text)?;
    out.reset()
}

fn write_table_stats(out: &mut impl WriteColor, stats: &LutStats) -> io::Result<()> {
    label(out, "Table width:")?;
    writeln!(out, "{} bits ({} entries)", stats.bits, stats.entries)?;
    label(out, "Table memory:")?;
    writeln!(out, "{}", format_size(stats.memory_bytes))?;
    label(out, "Last bucket:")?;
    writeln!(out, "{}", stats.end_bucket)?;
    label(out, "Occupied buckets:")?;
    writeln!(out, "{}", stats.occupied_buckets)?;
    label(out, "Largest span:")?;
    writeln!(out, "{}", stats.largest_span)?;
    label(out, "Mean span:")?;
    writeln!(out, "{:.2}", stats.mean_span)
}

fn write_run(out: &mut impl WriteColor, run: &RunReport) -> io::Result<()> {
    heading(
        out,
        &format!("{} / {}-bit table", run.domain.description(), run.table.bits),
    )?;
    label(out, "Values:")?;
    writeln!(out, "{}", run.num_values)?;
    label(out, "Keys:")?;
    writeln!(out, "{}", run.num_keys)?;
    label(out, "Build time:")?;
    writeln!(out, "{}", format_ms(run.build_ms))?;
    write_table_stats(out, &run.table)?;
    writeln!(out)?;

    for timing in &run.strategies {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "  {:<24}", timing.strategy.label())?;
        out.reset()?;
        writeln!(
            out,
            "{:>12}  {:>12}  checksum {}",
            format_ms(timing.elapsed_ms),
            format_rate(timing.searches_per_sec),
            timing.checksum
        )?;
    }

    if let Some(speedup) = run.lut_speedup() {
        let color = if speedup >= 1.0 { Color::Green } else { Color::Red };
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        writeln!(out, "lookup table speedup: {:.2}x", speedup)?;
        out.reset()?;
    }
    writeln!(out)
}

/// Print a sweep report
pub fn print_bench_report(report: &BenchReport, color: bool) -> Result<()> {
    let mut out = stdout(color);
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "Seed: {}   Widths: {}",
        report.config.seed,
        report
            .config
            .lut_bits
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    for run in &report.runs {
        write_run(&mut out, run)?;
    }
    Ok(())
}

/// Print the shape of a single table
pub fn print_table_report(report: &TableReport, color: bool) -> Result<()> {
    let mut out = stdout(color);
    heading(&mut out, "Lookup Table Statistics")?;
    label(&mut out, "Domain:")?;
    writeln!(out, "{}", report.domain.description())?;
    label(&mut out, "Values:")?;
    writeln!(out, "{}", report.num_values)?;
    label(&mut out, "Build time:")?;
    writeln!(out, "{}", format_ms(report.build_ms))?;
    write_table_stats(&mut out, &report.table)?;
    Ok(())
}

/// Print per-key results of every strategy
pub fn print_lookup_report(report: &LookupReport, color: bool) -> Result<()> {
    let mut out = stdout(color);
    heading(
        &mut out,
        &format!(
            "{} values of {}, {}-bit table",
            report.num_values, report.domain, report.bits
        ),
    )?;

    for lookup in &report.lookups {
        writeln!(out)?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "{}", lookup.key)?;
        out.reset()?;

        label(&mut out, "  mapped:")?;
        writeln!(out, "{:#010x} (bucket {})", lookup.mapped, lookup.bucket)?;
        label(&mut out, "  candidates:")?;
        match lookup.candidate {
            Some((start, end)) => writeln!(out, "[{}, {}]", start, end)?,
            None => writeln!(out, "none")?,
        }

        for (strategy, result) in &lookup.results {
            label(&mut out, &format!("  {}:", strategy))?;
            match result {
                Some(idx) => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                    writeln!(out, "{}", idx)?;
                }
                None => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                    writeln!(out, "not found")?;
                }
            }
            out.reset()?;
        }

        if !lookup.agrees() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(out, "  strategies disagree")?;
            out.reset()?;
        }
    }
    Ok(())
}
