//! InterComp: gene interaction type comparison
//!
//! Usage: intercomp <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use intercomp::commands::{
    CompareCommand, GenerateCommand, GenerateConfig, SizeSpec, StatsCommand,
};
use intercomp::config;
use intercomp::reader::InteractionError;

#[derive(Parser)]
#[command(name = "intercomp")]
#[command(version)]
#[command(about = "InterComp: find genes shared between two gene-interaction types", long_about = None)]
struct Cli {
    /// Accept data lines with more than 12 columns, ignoring the extra
    /// columns. By default every data line must have exactly 12.
    #[arg(long, global = true)]
    lenient: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary counts of an interaction file
    Stats {
        /// Input interaction file
        #[arg(short, long)]
        input: PathBuf,

        /// Also list every distinct interaction type
        #[arg(short, long)]
        types: bool,
    },

    /// Find side-B genes that have interactions of both types
    Compare {
        /// Input interaction file
        #[arg(short, long)]
        input: PathBuf,

        /// First interaction type
        #[arg(short = 'a', long = "type-a")]
        type_a: String,

        /// Second interaction type
        #[arg(short = 'b', long = "type-b")]
        type_b: String,

        /// Export intersecting genes to this file
        #[arg(long)]
        genes_out: Option<PathBuf>,

        /// Export PubMed identifiers of the intersection to this file
        #[arg(long)]
        pubmed_out: Option<PathBuf>,

        /// Print intersecting genes after the summary
        #[arg(short, long)]
        list: bool,
    },

    /// Generate a synthetic interaction file
    Generate {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of interactions (accepts K/M suffixes)
        #[arg(short = 'n', long, default_value = "10K")]
        count: String,

        /// Number of distinct genes per side
        #[arg(long, default_value = "1000")]
        genes: u32,

        /// Comma-separated interaction types
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "binding,inhibition,phosphorylation,activation"
        )]
        types: Vec<String>,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    config::set_lenient_columns(cli.lenient);

    let result = match cli.command {
        Commands::Stats { input, types } => run_stats(input, types),
        Commands::Compare {
            input,
            type_a,
            type_b,
            genes_out,
            pubmed_out,
            list,
        } => run_compare(input, type_a, type_b, genes_out, pubmed_out, list),
        Commands::Generate {
            output,
            count,
            genes,
            types,
            seed,
        } => run_generate(output, count, genes, types, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_stats(input: PathBuf, types: bool) -> Result<(), InteractionError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let cmd = StatsCommand { list_types: types };
    cmd.run(&input, &mut handle)?;
    Ok(())
}

fn run_compare(
    input: PathBuf,
    type_a: String,
    type_b: String,
    genes_out: Option<PathBuf>,
    pubmed_out: Option<PathBuf>,
    list: bool,
) -> Result<(), InteractionError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let mut cmd = CompareCommand::new(type_a, type_b);
    cmd.genes_out = genes_out;
    cmd.pubmed_out = pubmed_out;
    cmd.list = list;

    cmd.run(&input, &mut handle)?;
    Ok(())
}

fn run_generate(
    output: PathBuf,
    count: String,
    genes: u32,
    types: Vec<String>,
    seed: u64,
) -> Result<(), InteractionError> {
    let count = match SizeSpec::from_str(&count) {
        Some(size) => size.count,
        None => {
            eprintln!("Error: invalid count '{}', expected e.g. 500, 10K or 1M", count);
            process::exit(1);
        }
    };

    let config = GenerateConfig {
        output,
        count,
        genes,
        types: types
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        seed,
        ..GenerateConfig::default()
    };

    let stats = GenerateCommand::new(config).run()?;
    eprintln!("Generated {}", stats);
    Ok(())
}
