use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use carbon_footprint::cli::{Cli, Commands};
use carbon_footprint::input::{decode_row, is_skippable_row, parse_activity_row};
use carbon_footprint::{
    BenchmarkClassifier, BenchmarkTier, EmissionFactorTable, EngineConfig, FootprintCalculator,
    FootprintReport, ThresholdBenchmark,
};

#[derive(Debug, Serialize)]
struct BatchLine {
    id: String,
    total: f64,
    tier: BenchmarkTier,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_batch(
    path: &Path,
    calculator: &FootprintCalculator<'_>,
    classifier: &ThresholdBenchmark,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut failed = 0usize;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let lineno = idx + 1;
        let parsed = decode_row(raw?).and_then(|line| {
            if is_skippable_row(&line) {
                return Ok(None);
            }
            let (id, input) = parse_activity_row(&line)?;
            calculator.compute(&input).map(|b| Some((id, b)))
        });
        match parsed {
            Ok(None) => {}
            Ok(Some((id, breakdown))) => {
                debug!(line = lineno, id = %id, total = breakdown.total, "row computed");
                lines.push(BatchLine {
                    id,
                    total: breakdown.total,
                    tier: classifier.classify(breakdown.total),
                });
            }
            Err(e) => {
                warn!(line = lineno, error = %e, "skipping row");
                eprintln!("line {lineno}: {e}");
                failed += 1;
            }
        }
    }

    info!(rows = lines.len(), failed, "batch finished");
    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for l in &lines {
            println!("{},{:.2},{}", l.id, l.total, l.tier.label());
        }
    }

    if failed > 0 {
        return Err(format!("{failed} row(s) could not be processed").into());
    }
    Ok(())
}

fn print_factors(table: &EmissionFactorTable, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let factors: Vec<_> = table.iter().collect();
        println!("{}", serde_json::to_string_pretty(&factors)?);
        return Ok(());
    }
    for f in table.iter() {
        println!("{}: {} {} ({})", f.category, f.value_per_unit, f.unit, f.source_label);
        println!("    {}", f.description);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };

    let table = EmissionFactorTable::standard();
    let calculator = FootprintCalculator::new(table);
    let classifier = ThresholdBenchmark::default();

    match cli.command {
        Commands::Report { activity, toggles } => {
            let input = activity.to_input();
            let report = FootprintReport::build(
                &calculator,
                &classifier,
                &input,
                &toggles.to_toggles(),
                &config,
            )?;
            info!(total = report.breakdown.total, tier = ?report.tier, "report built");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Commands::Batch { path } => run_batch(&path, &calculator, &classifier, cli.json)?,
        Commands::Factors => print_factors(table, cli.json)?,
    }

    Ok(())
}
