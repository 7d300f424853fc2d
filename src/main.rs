use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lutsearch::bench::{self, BenchConfig};
use lutsearch::index::{LutBits, ValueDomain};
use lutsearch::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lutsearch")]
#[command(about = "Lookup-table accelerated binary search over sorted 32-bit values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

/// Data set options shared by every subcommand
#[derive(Args)]
struct DataArgs {
    /// JSON config file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of sorted values to generate
    #[arg(long)]
    values: Option<usize>,

    /// Seed for the data set generator
    #[arg(long)]
    seed: Option<u64>,
}

impl DataArgs {
    fn load(&self) -> Result<BenchConfig> {
        let mut config = BenchConfig::load_or_default(self.config.as_deref())?;
        if let Some(values) = self.values {
            config.num_values = values;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }

    /// Config for subcommands that only need the sorted values
    fn load_values_only(&self) -> Result<BenchConfig> {
        let config = self.load()?.without_keys();
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Time all search strategies over domains and table widths
    Bench {
        #[command(flatten)]
        data: DataArgs,

        /// Number of keys to look up
        #[arg(long)]
        keys: Option<usize>,

        /// Table width in bits (repeatable)
        #[arg(short, long = "bits", value_parser = parse_bits)]
        bits: Vec<LutBits>,

        /// Value domain (repeatable)
        #[arg(short, long = "domain", value_enum)]
        domain: Vec<ValueDomain>,

        /// Skip checking each hit against its key
        #[arg(long)]
        no_verify: bool,
    },
    /// Show lookup table statistics for one domain and width
    Table {
        #[command(flatten)]
        data: DataArgs,

        /// Value domain
        #[arg(short, long, value_enum, default_value = "u32")]
        domain: ValueDomain,

        /// Table width in bits
        #[arg(short, long, value_parser = parse_bits, default_value = "16")]
        bits: LutBits,
    },
    /// Look up keys with every strategy and show the selected interval
    Lookup {
        #[command(flatten)]
        data: DataArgs,

        /// Value domain
        #[arg(short, long, value_enum, default_value = "u32")]
        domain: ValueDomain,

        /// Table width in bits
        #[arg(short, long, value_parser = parse_bits, default_value = "16")]
        bits: LutBits,

        /// Keys to look up
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

fn parse_bits(s: &str) -> Result<LutBits> {
    LutBits::new(s.trim().parse()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;
    let show_progress = !cli.json;

    match cli.command {
        Commands::Bench {
            data,
            keys,
            bits,
            domain,
            no_verify,
        } => {
            let mut config = data.load()?;
            if let Some(keys) = keys {
                config.num_keys = keys;
            }
            if !bits.is_empty() {
                config.lut_bits = bits;
            }
            if !domain.is_empty() {
                config.domains = domain;
            }
            if no_verify {
                config.verify = false;
            }

            let report = bench::run_benchmark(&config, show_progress)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_bench_report(&report, color)?;
            }
        }
        Commands::Table { data, domain, bits } => {
            let config = data.load_values_only()?;
            let report = bench::describe_table(&config, domain, bits, show_progress)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_table_report(&report, color)?;
            }
        }
        Commands::Lookup {
            data,
            domain,
            bits,
            keys,
        } => {
            let config = data.load_values_only()?;
            let report = bench::lookup_keys(&config, domain, bits, &keys, show_progress)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_lookup_report(&report, color)?;
            }
            if report.lookups.iter().any(|l| !l.agrees()) {
                eprintln!("lutsearch: search strategies disagree");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
