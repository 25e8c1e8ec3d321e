//! Error types for sieve-report

use std::path::PathBuf;
use thiserror::Error;

/// Report error type
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error on a named file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input had a header but no data rows
    #[error("no benchmark results found in input")]
    EmptyDataset,

    /// A data row could not be interpreted
    #[error("invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReportError>;
