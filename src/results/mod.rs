//! Benchmark result loading
//!
//! Results come from a CSV file with the header `Version,Threads,OS,Time`,
//! one row per benchmark run. Column order does not matter and extra columns
//! are ignored.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Sieve variant (e.g. mutex, spinlock, atomic, unsafe)
    #[serde(rename = "Version")]
    pub version: String,
    /// Number of worker threads
    #[serde(rename = "Threads")]
    pub threads: u32,
    /// Operating system the run was taken on
    #[serde(rename = "OS")]
    pub os: String,
    /// Execution time in seconds
    #[serde(rename = "Time")]
    pub time: f64,
}

/// All benchmark runs loaded from one input, in file order
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<BenchmarkRecord>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Load results from a CSV file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load results from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut row = csv::StringRecord::new();
        let mut set = Self::new();

        while rdr.read_record(&mut row)? {
            // Physical line in the file, blank lines and multi-line fields included
            let line = row.position().map_or(0, |p| p.line());
            let record: BenchmarkRecord = row
                .deserialize(Some(&headers))
                .map_err(|err| invalid_record(err, line))?;
            if !record.time.is_finite() {
                return Err(ReportError::InvalidRecord {
                    line,
                    message: format!("time is not a finite number: {}", record.time),
                });
            }
            set.add(record);
        }

        if set.is_empty() {
            return Err(ReportError::EmptyDataset);
        }

        tracing::debug!("Parsed {} benchmark records", set.len());
        Ok(set)
    }

    /// Add a record
    pub fn add(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter()
    }

    /// Distinct versions, sorted
    pub fn versions(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.version.as_str()).collect();
        set.into_iter().collect()
    }

    /// Distinct operating systems, sorted
    pub fn operating_systems(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.os.as_str()).collect();
        set.into_iter().collect()
    }
}

/// Deserialize failures carry the offending line, everything else stays a CSV error.
fn invalid_record(err: csv::Error, line: u64) -> ReportError {
    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        return ReportError::InvalidRecord {
            line,
            message: de.to_string(),
        };
    }
    ReportError::Csv(err)
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = ["Version", "Threads", "OS", "Time"];
        let rows: Vec<[String; 4]> = self
            .records
            .iter()
            .map(|r| {
                [
                    r.version.clone(),
                    r.threads.to_string(),
                    r.os.clone(),
                    r.time.to_string(),
                ]
            })
            .collect();

        let index_width = self.records.len().saturating_sub(1).to_string().len();
        let mut widths = headers.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write!(f, "{:index_width$}", "")?;
        for (header, width) in headers.iter().zip(widths) {
            write!(f, "  {:>width$}", header)?;
        }
        writeln!(f)?;

        for (idx, row) in rows.iter().enumerate() {
            write!(f, "{:<index_width$}", idx)?;
            for (cell, width) in row.iter().zip(widths) {
                write!(f, "  {:>width$}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
