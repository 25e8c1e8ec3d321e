//! Sieve Report - summary tables and charts for sieve benchmark results
//!
//! Reads the `all_results.csv` produced by the sieve benchmark runs and
//! turns it into a Markdown summary and a PNG bar chart.
//!
//! # Architecture
//!
//! - **Results**: CSV loading into typed benchmark records
//! - **Summary**: Mean execution time pivoted by (Version, Threads) and OS
//! - **Output**: Markdown report, plus optional CSV and JSON exports
//! - **Visualization**: Grouped bar chart rendering
//! - **CLI**: Argument parsing and the report pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use sieve_report::{MarkdownExporter, ResultSet, SummaryTable};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let results = ResultSet::from_path(Path::new("all_results.csv"))?;
//!     let summary = SummaryTable::from_results(&results);
//!     MarkdownExporter::export(&summary, "summary_report.md")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod results;
pub mod summary;
pub mod visualization;

// Re-export commonly used types
pub use error::{ReportError, Result};
pub use output::{CsvExporter, JsonExporter, MarkdownExporter};
pub use results::{BenchmarkRecord, ResultSet};
pub use summary::{BarGroup, SummaryRow, SummaryTable};
pub use visualization::BarChartPlotter;
