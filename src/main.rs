mod input;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::{load_dataset, Dataset};
use crate::model::observation::{ModelSize, Observation};
use crate::model::weights::{
    WeightVector, DEFAULT_ENERGY_WEIGHT, DEFAULT_LATENCY_WEIGHT, DEFAULT_QUALITY_WEIGHT,
};
use crate::pipeline::stage2_filter::{run_stage2, FilterSelection};
use crate::pipeline::stage3_aggregate::run_stage3;
use crate::pipeline::stage5_rank::run_stage5;
use crate::pipeline::stage6_report::{write_averages, write_reports};
use crate::report::RankingContext;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "comparia",
    version,
    about = "Weighted ranking of LLM benchmark runs by quality, latency and energy"
)]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank models per task category with a weighted composite score.
    Rank(RankArgs),
    /// Export quality/latency/energy/CO2 means per task category and model size.
    Averages(AveragesArgs),
}

#[derive(Debug, Args)]
struct RankArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Directory for ranking.csv, report.txt and summary.json.
    #[arg(long)]
    out: PathBuf,

    /// Weight of mean quality (higher is better).
    #[arg(long, default_value_t = DEFAULT_QUALITY_WEIGHT)]
    weight_quality: f64,

    /// Weight of mean latency (lower is better).
    #[arg(long, default_value_t = DEFAULT_LATENCY_WEIGHT)]
    weight_latency: f64,

    /// Weight of mean energy (lower is better).
    #[arg(long, default_value_t = DEFAULT_ENERGY_WEIGHT)]
    weight_energy: f64,

    /// How many entries to list per task category.
    #[arg(long, default_value_t = 5)]
    top: usize,
}

#[derive(Debug, Args)]
struct AveragesArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Directory for averages.csv.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Debug, Args)]
struct DataArgs {
    /// Benchmark CSV export, optionally gzip-compressed.
    #[arg(long)]
    data: PathBuf,

    /// Keep only these model sizes.
    #[arg(long = "size", value_enum)]
    sizes: Vec<SizeArg>,

    /// Keep only these models (case-insensitive).
    #[arg(long = "model")]
    models: Vec<String>,

    /// Keep only these task categories (case-insensitive).
    #[arg(long = "category")]
    categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for ModelSize {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Small => ModelSize::Small,
            SizeArg::Medium => ModelSize::Medium,
            SizeArg::Large => ModelSize::Large,
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Rank(args) => run_rank(&args),
        Command::Averages(args) => run_averages(&args),
    }
}

fn run_rank(args: &RankArgs) -> Result<(), String> {
    let weights = WeightVector::new(args.weight_quality, args.weight_latency, args.weight_energy)
        .map_err(|e| e.to_string())?;

    let (dataset, filtered, selection) = load_filtered(&args.data)?;

    let stage3 = run_stage3(&filtered);
    let rankings = run_stage5(&stage3.models, &weights);
    info!(
        "ranked {} entries across {} task categories",
        rankings.iter().map(|r| r.entries.len()).sum::<usize>(),
        rankings.len()
    );

    let ctx = RankingContext {
        rankings: &rankings,
        weights: &weights,
        selection: &selection,
        top: args.top,
        source: &dataset.source,
        runs: filtered.len(),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&ctx, &args.out).map_err(|e| e.to_string())?;

    Ok(())
}

fn run_averages(args: &AveragesArgs) -> Result<(), String> {
    let (_, filtered, _) = load_filtered(&args.data)?;

    let stage3 = run_stage3(&filtered);
    write_averages(&stage3.sizes, &args.out).map_err(|e| e.to_string())?;

    Ok(())
}

fn load_filtered(args: &DataArgs) -> Result<(Dataset, Vec<Observation>, FilterSelection), String> {
    let dataset = load_dataset(&args.data).map_err(|e| e.to_string())?;
    let sizes: Vec<ModelSize> = args.sizes.iter().map(|s| ModelSize::from(*s)).collect();
    let selection = FilterSelection::from_args(&sizes, &args.models, &args.categories);
    let filtered = run_stage2(&dataset.observations, &selection).map_err(|e| e.to_string())?;
    Ok((dataset, filtered, selection))
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
