//! Markdown summary report

use crate::summary::{SummaryTable, SUMMARY_PRECISION};
use anyhow::Result;
use std::fs;

/// Report heading
pub const REPORT_TITLE: &str = "# Sieve Benchmark Summary";
/// Line under the heading describing the values
pub const REPORT_DESCRIPTION: &str = "Execution time in seconds (average).";

/// Placeholder for cells without samples
const MISSING_CELL: &str = "nan";

pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Render the full report: heading, description and pivot table
    pub fn render(summary: &SummaryTable) -> String {
        let mut out = String::new();
        out.push_str(REPORT_TITLE);
        out.push_str("\n\n");
        out.push_str(REPORT_DESCRIPTION);
        out.push_str("\n\n");
        out.push_str(&Self::render_table(summary));
        out
    }

    /// Render only the pipe table
    pub fn render_table(summary: &SummaryTable) -> String {
        let mut headers = vec!["Version".to_string(), "Threads".to_string()];
        headers.extend(summary.columns().iter().cloned());

        let rows: Vec<Vec<String>> = summary
            .rows()
            .into_iter()
            .map(|row| {
                let mut cells = vec![row.version, row.threads.to_string()];
                cells.extend(row.times.iter().map(|t| match t {
                    Some(v) => format!("{:.*}", SUMMARY_PRECISION as usize, v),
                    None => MISSING_CELL.to_string(),
                }));
                cells
            })
            .collect();

        // The separator needs at least three characters per column.
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len().max(3)).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();

        let header_cells: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{:<w$}", h))
            .collect();
        push_line(&mut out, &header_cells);

        // First column is text, the rest are numeric.
        let separators: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(idx, &w)| {
                if idx == 0 {
                    format!(":{}", "-".repeat(w - 1))
                } else {
                    format!("{}:", "-".repeat(w - 1))
                }
            })
            .collect();
        push_line(&mut out, &separators);

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(idx, (cell, &w))| {
                    if idx == 0 {
                        format!("{:<w$}", cell)
                    } else {
                        format!("{:>w$}", cell)
                    }
                })
                .collect();
            push_line(&mut out, &cells);
        }

        out
    }

    /// Write the report to a file
    pub fn export(summary: &SummaryTable, path: &str) -> Result<()> {
        fs::write(path, Self::render(summary))?;
        Ok(())
    }
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultSet;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
Version,Threads,OS,Time
spinlock,4,windows,1.5
spinlock,4,linux,1.0
spinlock,4,linux,1.2
mutex,4,linux,2.00049
mutex,16,windows,0.25
";

    fn summary() -> SummaryTable {
        SummaryTable::from_results(&ResultSet::from_reader(SAMPLE.as_bytes()).unwrap())
    }

    #[test]
    fn test_render_table() {
        let table = MarkdownExporter::render_table(&summary());
        let expected = "\
| Version  | Threads | linux | windows |
| :------- | ------: | ----: | ------: |
| mutex    |       4 | 2.000 |     nan |
| mutex    |      16 |   nan |   0.250 |
| spinlock |       4 | 1.100 |   1.500 |
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_report() {
        let report = MarkdownExporter::render(&summary());
        assert!(report.starts_with(
            "# Sieve Benchmark Summary\n\nExecution time in seconds (average).\n\n| Version"
        ));
        assert!(report.ends_with("|\n"));
    }

    #[test]
    fn test_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary_report.md");
        let path = path.to_str().unwrap();

        MarkdownExporter::export(&summary(), path).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, MarkdownExporter::render(&summary()));
        assert!(written.contains("| spinlock |       4 | 1.100 |   1.500 |"));
    }
}
