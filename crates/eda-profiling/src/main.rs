//! CLI entry point for the EDA profiling dashboard.
//!
//! Loads a CSV, runs the profiler, quality assessor and insight engine,
//! and prints either a human-readable dashboard summary or a JSON report.
//! All analysis logic lives in the library; this binary only renders.

use anyhow::{Result, anyhow};
use clap::Parser;
use eda_profiling::{
    AnalysisReport, InsightEngine, InsightThresholds, ReportGenerator, loader, preview,
};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis for CSV datasets",
    long_about = "Computes descriptive statistics, data-quality findings and quick insights\n\
                  for a CSV dataset.\n\n\
                  EXAMPLES:\n  \
                  # Human-readable dashboard summary\n  \
                  eda-profiling -i data.csv\n\n  \
                  # Machine-readable output\n  \
                  eda-profiling -i data.csv --json | jq .insights\n\n  \
                  # Save a detailed JSON report\n  \
                  eda-profiling -i data.csv --emit-report -o results/"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for generated reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Custom report file name (without extension)
    ///
    /// If not specified, uses "<input_name>_report"
    #[arg(long)]
    output_name: Option<String>,

    /// Output JSON to stdout instead of the human-readable summary
    ///
    /// Disables all progress logs; only outputs the final JSON report.
    #[arg(long)]
    json: bool,

    /// Write a detailed JSON report to the output directory
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Number of rows to show in the data preview
    #[arg(long, default_value = "10")]
    preview_rows: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final summary)
    #[arg(short, long)]
    quiet: bool,

    /// Row count above which the large-dataset advisory fires
    #[arg(long, default_value = "100000")]
    large_row_threshold: usize,

    /// Row count below which the small-dataset advisory fires
    #[arg(long, default_value = "100")]
    small_row_threshold: usize,

    /// Overall missing percentage above which missingness counts as high
    #[arg(long, default_value = "20.0")]
    high_missing_threshold: f64,

    /// Overall missing percentage above which missingness counts as moderate
    #[arg(long, default_value = "5.0")]
    moderate_missing_threshold: f64,

    /// Duplicate-row percentage above which deduplication is advised
    #[arg(long, default_value = "5.0")]
    duplicate_threshold: f64,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    info!("Loading dataset from: {}", args.input);
    let df = loader::load_csv(&args.input)
        .map_err(|e| anyhow!("Could not load '{}': {}", args.input, e))?;
    info!("Dataset loaded successfully: {:?}", df.shape());

    let thresholds = InsightThresholds::builder()
        .large_row_count(args.large_row_threshold)
        .small_row_count(args.small_row_threshold)
        .high_missing_percentage(args.high_missing_threshold)
        .moderate_missing_percentage(args.moderate_missing_threshold)
        .duplicate_percentage(args.duplicate_threshold)
        .build()?;
    let engine = InsightEngine::new(thresholds);

    let report = ReportGenerator::build_report(&df, Some(&args.input), &engine)?;

    // JSON output to stdout replaces every other surface
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let generator =
            ReportGenerator::new(PathBuf::from(&args.output), args.output_name.clone());
        let report_path = generator.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", report_path.display());
    }

    print_dashboard(&report, &df, args.preview_rows);

    Ok(())
}

/// Print the dashboard sections as text.
///
/// Note: this function uses `println!` intentionally for user-facing CLI
/// output; unlike logging it should always be visible regardless of log
/// level settings.
fn print_dashboard(report: &AnalysisReport, df: &DataFrame, preview_rows: usize) {
    let profile = &report.profile;
    let quality = &report.quality;

    println!("\n{}", "=".repeat(80));
    println!("DATA OVERVIEW");
    println!("{}", "=".repeat(80));
    println!("  Rows:            {}", profile.row_count);
    println!("  Columns:         {}", profile.column_count);
    println!(
        "  Memory (approx): {:.1} MB",
        eda_profiling::bytes_to_mb(profile.memory_bytes)
    );
    println!("  Missing values:  {}", profile.total_null_count);
    println!("  Duplicate rows:  {}", profile.duplicate_row_count);
    println!();

    if preview_rows > 0 && profile.row_count > 0 {
        println!("DATA PREVIEW (first {} rows)", preview_rows.min(profile.row_count));
        println!("{}", "-".repeat(40));
        println!("{}", preview::head(df, preview_rows));
        println!();
    }

    println!("COLUMN PROFILES");
    println!("{}", "-".repeat(40));
    println!(
        "{:<20} {:<12} {:<12} {:<10} {:<10}",
        "Column", "Dtype", "Kind", "Missing %", "Distinct"
    );
    println!("{}", "-".repeat(70));
    for col in &profile.columns {
        println!(
            "{:<20} {:<12} {:<12} {:<10.1} {:<10}",
            truncate_str(&col.name, 19),
            truncate_str(&col.dtype, 11),
            col.kind.display_name(),
            col.null_percentage,
            col.distinct_count
        );
    }
    println!();

    println!("MISSING VALUES");
    println!("{}", "-".repeat(40));
    if quality.missing_values.is_empty() {
        println!("  No missing values found");
    } else {
        for entry in &quality.missing_values {
            println!(
                "  {:<20} {} nulls ({:.2}%)",
                truncate_str(&entry.column, 19),
                entry.null_count,
                entry.null_percentage
            );
        }
    }
    println!();

    println!("DUPLICATE ROWS");
    println!("{}", "-".repeat(40));
    if quality.duplicate_row_count == 0 {
        println!("  No duplicate rows found");
    } else {
        println!(
            "  {} duplicate rows ({:.1}% of data)",
            quality.duplicate_row_count, quality.duplicate_percentage
        );
        println!("{}", preview::head(&quality.duplicate_rows, preview_rows));
    }
    println!();

    println!("QUICK INSIGHTS");
    println!("{}", "-".repeat(40));
    for insight in &report.insights {
        println!("  - [{}] {}", insight.kind.display_name(), insight.message);
    }
    println!();

    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save a detailed JSON report");
    println!("{}", "=".repeat(80));
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
