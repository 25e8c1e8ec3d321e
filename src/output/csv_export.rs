//! CSV export of the summary pivot

use crate::summary::SummaryTable;
use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::io::Write;

pub struct CsvExporter;

impl CsvExporter {
    /// Export the pivot to a CSV file
    pub fn export_summary(summary: &SummaryTable, path: &str) -> Result<()> {
        let file = File::create(path)?;
        Self::write_summary(summary, file)
    }

    /// Write the pivot as CSV to any writer
    pub fn write_summary<W: Write>(summary: &SummaryTable, writer: W) -> Result<()> {
        let mut wtr = Writer::from_writer(writer);

        // Write headers
        let mut headers = vec!["Version".to_string(), "Threads".to_string()];
        headers.extend(summary.columns().iter().cloned());
        wtr.write_record(&headers)?;

        // Write data rows, empty cell where no run exists
        for row in summary.rows() {
            let mut record = vec![row.version, row.threads.to_string()];
            record.extend(
                row.times
                    .iter()
                    .map(|t| t.map(|v| v.to_string()).unwrap_or_default()),
            );
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultSet;

    #[test]
    fn test_write_summary() {
        let input = "\
Version,Threads,OS,Time
atomic,8,linux,0.4
atomic,8,linux,0.6
unsafe,8,macos,0.1234
";
        let summary =
            SummaryTable::from_results(&ResultSet::from_reader(input.as_bytes()).unwrap());

        let mut buf = Vec::new();
        CsvExporter::write_summary(&summary, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Version,Threads,linux,macos\natomic,8,0.5,\nunsafe,8,,0.123\n"
        );
    }
}
