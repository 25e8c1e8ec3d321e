//! CLI argument parsing and report generation

use crate::output::{CsvExporter, JsonExporter, MarkdownExporter};
use crate::results::ResultSet;
use crate::summary::SummaryTable;
use crate::visualization::BarChartPlotter;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

/// Sieve Report - summarize sieve benchmark results
#[derive(Parser, Debug)]
#[command(name = "sieve-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file with Version, Threads, OS and Time columns
    #[arg(short, long, env = "SIEVE_REPORT_INPUT", default_value = "all_results.csv")]
    pub input: String,

    /// Path of the Markdown summary report
    #[arg(short, long, env = "SIEVE_REPORT_SUMMARY", default_value = "summary_report.md")]
    pub summary: String,

    /// Path of the PNG bar chart
    #[arg(short, long, env = "SIEVE_REPORT_CHART", default_value = "results_chart.png")]
    pub chart: String,

    /// Also export the summary pivot to this CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// Also export the summary pivot to this JSON file
    #[arg(long)]
    pub json: Option<String>,

    /// Skip rendering the chart
    #[arg(long)]
    pub no_chart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            input: "all_results.csv".to_string(),
            summary: "summary_report.md".to_string(),
            chart: "results_chart.png".to_string(),
            csv: None,
            json: None,
            no_chart: false,
            verbose: false,
        }
    }
}

impl Cli {
    /// Load the results, then write the report and the chart
    pub fn run(&self) -> Result<()> {
        tracing::info!("Reading benchmark results from {}", self.input);

        // 1. Load data
        let results = ResultSet::from_path(Path::new(&self.input))
            .with_context(|| format!("Failed to load results from: {}", self.input))?;

        println!("Data loaded successfully:");
        print!("{}", results);

        tracing::info!(
            "Loaded {} runs across {} versions and {} operating systems",
            results.len(),
            results.versions().len(),
            results.operating_systems().len()
        );

        // 2. Pivot
        let summary = SummaryTable::from_results(&results);
        tracing::debug!("Summary has {} rows", summary.len());

        // 3. Markdown report
        MarkdownExporter::export(&summary, &self.summary)
            .with_context(|| format!("Failed to write summary report to: {}", self.summary))?;
        println!("\nSummary report '{}' generated.", self.summary);

        if let Some(ref path) = self.csv {
            CsvExporter::export_summary(&summary, path)
                .with_context(|| format!("Failed to export CSV to: {}", path))?;
            println!("Summary CSV '{}' generated.", path);
        }

        if let Some(ref path) = self.json {
            JsonExporter::export_summary(&summary, path)
                .with_context(|| format!("Failed to export JSON to: {}", path))?;
            println!("Summary JSON '{}' generated.", path);
        }

        // 4. Chart
        if self.no_chart {
            tracing::info!("Chart rendering disabled");
        } else {
            BarChartPlotter::plot(&summary, &self.chart)
                .with_context(|| format!("Failed to generate chart: {}", self.chart))?;
            println!("Chart '{}' generated.", self.chart);
        }

        Ok(())
    }
}
