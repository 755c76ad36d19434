//! pension-report: stakeholder report over a pension participant dataset.
//!
//! Usage:
//!   pension-report
//!   pension-report run --input data.csv --target-balance 750000
//!   pension-report generate --seed 12345 --individuals 500 --output data.csv

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pension_core::{
    config::ReportConfig,
    engine::{ReportEngine, RunSummary},
    generator::{write_csv_file, GeneratorConfig, PopulationGenerator},
    table::DataTable,
};
use std::{io, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pension-report")]
#[command(about = "Descriptive statistics and charts for a pension fund dataset")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every analysis (the default when no command is given)
    Run(RunArgs),
    /// Write a synthetic participant dataset
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Participant CSV to analyse
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for chart PNGs
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Balance a participant needs at retirement age to count as ready
    #[arg(long)]
    target_balance: Option<f64>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 1_000)]
    individuals: u32,

    #[arg(short, long, default_value = pension_core::config::DEFAULT_INPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => run_report(args),
        Command::Generate(args) => generate_dataset(args),
    }
}

fn resolve_config(args: RunArgs) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(target) = args.target_balance {
        config.target_balance = target;
    }
    log::debug!("resolved config: {config:?}");
    Ok(config)
}

fn run_report(args: RunArgs) -> Result<()> {
    let config = resolve_config(args)?;

    println!("Running Pension Fund Analysis...");
    println!("  input:          {}", config.input_path.display());
    println!("  charts:         {}", config.output_dir.display());
    println!("  target balance: {:.2}", config.target_balance);
    println!(
        "  started:        {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    let table = DataTable::from_path(&config.input_path)
        .with_context(|| format!("loading dataset {}", config.input_path.display()))?;

    let engine = ReportEngine::build(config);
    let mut stdout = io::stdout().lock();
    let summary = engine.run(&table, &mut stdout).context("running report")?;

    print_summary(&summary, table.len());
    Ok(())
}

fn print_summary(summary: &RunSummary, rows: usize) {
    println!("=== RUN SUMMARY ===");
    println!("  rows analysed:  {rows}");
    println!("  sections run:   {}", summary.sections_run.len());
    for chart in &summary.charts {
        println!("  chart:          {}", chart.display());
    }
    println!("Analysis complete.");
}

fn generate_dataset(args: GenerateArgs) -> Result<()> {
    let generator = PopulationGenerator::new(GeneratorConfig {
        seed: args.seed,
        individuals: args.individuals,
        ..GeneratorConfig::default()
    });
    let rows = generator.generate();
    write_csv_file(&rows, &args.output)
        .with_context(|| format!("writing dataset {}", args.output.display()))?;

    println!("=== DATASET GENERATED ===");
    println!("  seed:        {}", args.seed);
    println!("  individuals: {}", args.individuals);
    println!("  rows:        {}", rows.len());
    println!("  output:      {}", args.output.display());
    Ok(())
}
