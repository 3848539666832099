use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lists_distance::{calculate_distance, calculate_similarity};

#[derive(Parser)]
#[command(name = "lists_distance")]
#[command(about = "Distance between two sorted columns of integers")]
struct Cli {
    /// Path to the input file
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,
    /// Which number to report
    #[arg(long, value_enum, default_value_t = Metric::Distance)]
    metric: Metric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Metric {
    /// Sum of differences between same-ranked entries
    Distance,
    /// Sum of left entries weighted by how often they appear on the right
    Similarity,
}

/// The single line printed on success.
fn report(metric: Metric, input: &Path) -> Result<String> {
    match metric {
        Metric::Distance => {
            let distance = calculate_distance(input).with_context(|| {
                format!("failed to compute lists distance from {}", input.display())
            })?;
            Ok(format!("Lists distance: {distance}"))
        }
        Metric::Similarity => {
            let similarity = calculate_similarity(input).with_context(|| {
                format!("failed to compute lists similarity from {}", input.display())
            })?;
            Ok(format!("Lists similarity: {similarity}"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    println!("{}", report(cli.metric, &cli.input)?);
    Ok(())
}
