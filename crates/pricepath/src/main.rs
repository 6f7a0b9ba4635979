use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pricepath_core::{HistoricalRiskReport, SimulationConfig, simulate};

mod input;
mod logging;
mod report;

#[derive(Parser, Debug)]
#[command(name = "pricepath")]
#[command(about = "Monte Carlo price-path simulator with smoothing and risk statistics")]
struct Args {
    /// JSON file holding an array of {"date", "close"} records
    #[arg(short, long)]
    input: PathBuf,

    /// Number of simulated price paths
    #[arg(long, default_value_t = 1000)]
    paths: usize,

    /// Number of time steps per path, including the starting day
    #[arg(long, default_value_t = 180)]
    days: usize,

    /// Smoothing window (default: adaptive, min(20, days / 10))
    #[arg(long)]
    window: Option<usize>,

    /// Seed for the random source; a fixed seed reproduces the same paths
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    let series = input::load_series(&args.input)?;
    tracing::info!(
        observations = series.len(),
        paths = args.paths,
        days = args.days,
        seed = args.seed,
        "running simulation"
    );

    let config = SimulationConfig {
        num_paths: args.paths,
        days: args.days,
        window: args.window,
    };
    let set = simulate(&series, &config, args.seed)?;
    let historical = HistoricalRiskReport::from_series(&series)?;

    match args.format {
        OutputFormat::Text => report::print_text(&set, &historical)?,
        OutputFormat::Json => println!("{}", report::to_json(&set, &historical)?),
    }

    Ok(())
}
