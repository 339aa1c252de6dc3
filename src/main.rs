use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

mod aggregate;
mod comparisons;
mod config;
mod error;
mod extract;
mod models;
mod persona;
mod report;

use config::AnalysisConfig;
use error::AnalysisError;
use models::{AggregateStats, Extraction};

#[derive(Parser)]
#[command(name = "tiktok-reality-check")]
#[command(about = "Reality check for a personal TikTok watch-history export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print aggregate statistics for an export
    Stats {
        export: PathBuf,
        #[arg(long, default_value_t = config::DEFAULT_AVG_VIDEO_SECONDS)]
        avg_duration: u32,
        /// Emit the stats as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the scrolling persona derived from the peak hour
    Persona {
        export: PathBuf,
        #[arg(long)]
        guilt_trip: bool,
        #[arg(long, default_value_t = config::DEFAULT_AVG_VIDEO_SECONDS)]
        avg_duration: u32,
    },
    /// Write the full markdown dashboard report
    Report {
        export: PathBuf,
        #[arg(long)]
        guilt_trip: bool,
        #[arg(long, default_value_t = config::DEFAULT_AVG_VIDEO_SECONDS)]
        avg_duration: u32,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            export,
            avg_duration,
            json,
        } => {
            let config = AnalysisConfig::new(false, avg_duration)?;
            let Some((extraction, stats)) = analyze(&export, &config)? else {
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }
            println!("Videos watched: {}", stats.total_events);
            println!(
                "Total watch time: {:.1} hours ({:.1} days)",
                stats.total_hours(),
                stats.total_days()
            );
            if let Some(peak) = stats.peak_hour {
                println!(
                    "Peak hour: {:02}:00 with {} videos",
                    peak, stats.hour_histogram[peak as usize]
                );
            }
            if extraction.skipped > 0 {
                println!("Skipped {} unreadable record(s).", extraction.skipped);
            }
        }
        Commands::Persona {
            export,
            guilt_trip,
            avg_duration,
        } => {
            let config = AnalysisConfig::new(guilt_trip, avg_duration)?;
            let Some((_, stats)) = analyze(&export, &config)? else {
                return Ok(());
            };
            // analyze() only returns stats for a non-empty dataset
            let peak = stats.peak_hour.context("no peak hour for a non-empty dataset")?;
            let result = persona::classify(peak, config.guilt_trip);
            println!("{}", result.title);
            println!("{}", result.description);
        }
        Commands::Report {
            export,
            guilt_trip,
            avg_duration,
            out,
        } => {
            let config = AnalysisConfig::new(guilt_trip, avg_duration)?;
            let Some((extraction, stats)) = analyze(&export, &config)? else {
                return Ok(());
            };
            let peak = stats.peak_hour.context("no peak hour for a non-empty dataset")?;
            let result = persona::classify(peak, config.guilt_trip);
            let entries = comparisons::compare(stats.total_duration_seconds);
            let report = report::build_report(&extraction, &stats, &result, &entries);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

/// Runs extraction and aggregation for one export file. An empty dataset
/// is a normal outcome (fresh account, wrong file), reported as a message
/// rather than an error.
fn analyze(
    export_path: &Path,
    config: &AnalysisConfig,
) -> anyhow::Result<Option<(Extraction, AggregateStats)>> {
    let raw = std::fs::read_to_string(export_path)
        .with_context(|| format!("failed to read {}", export_path.display()))?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", export_path.display()))?;

    match extract::extract_events(&parsed, config) {
        Ok(extraction) => {
            let stats = aggregate::aggregate(&extraction.events);
            Ok(Some((extraction, stats)))
        }
        Err(AnalysisError::EmptyDataset) => {
            println!("No watch history found in this export. Nothing to analyze.");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
