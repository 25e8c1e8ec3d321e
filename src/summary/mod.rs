//! Pivot of mean execution time by (Version, Threads) and OS

use crate::results::ResultSet;
use std::collections::BTreeMap;

/// Decimal places kept in the summary cells
pub const SUMMARY_PRECISION: i32 = 3;

/// Row key of the summary pivot
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowKey {
    pub version: String,
    pub threads: u32,
}

/// One row of the summary pivot
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub version: String,
    pub threads: u32,
    /// Rounded mean per OS column, `None` where no run exists
    pub times: Vec<Option<f64>>,
}

/// Bars drawn for one (Version, Threads) pair
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    /// `(os, mean time)` for every OS with data
    pub bars: Vec<(String, f64)>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: u32,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Mean execution time grid: rows sorted by version then thread count,
/// one column per operating system sorted by name
#[derive(Debug, Clone)]
pub struct SummaryTable {
    columns: Vec<String>,
    rows: Vec<RowKey>,
    /// Unrounded means, indexed `[row][column]`
    means: Vec<Vec<Option<f64>>>,
}

impl SummaryTable {
    /// Aggregate a result set into the pivot
    pub fn from_results(results: &ResultSet) -> Self {
        let columns: Vec<String> = results
            .operating_systems()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut cells: BTreeMap<RowKey, Vec<Accumulator>> = BTreeMap::new();
        for record in results.iter() {
            let key = RowKey {
                version: record.version.clone(),
                threads: record.threads,
            };
            // Columns come from the same records, so the lookup always succeeds.
            if let Ok(col) = columns.binary_search(&record.os) {
                cells
                    .entry(key)
                    .or_insert_with(|| vec![Accumulator::default(); columns.len()])[col]
                    .push(record.time);
            }
        }

        let (rows, means): (Vec<RowKey>, Vec<Vec<Option<f64>>>) = cells
            .into_iter()
            .map(|(key, accs)| {
                let means = accs.iter().map(Accumulator::mean).collect::<Vec<_>>();
                (key, means)
            })
            .unzip();

        Self {
            columns,
            rows,
            means,
        }
    }

    /// Operating system column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows with their rounded means
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.rows
            .iter()
            .zip(&self.means)
            .map(|(key, means)| SummaryRow {
                version: key.version.clone(),
                threads: key.threads,
                times: means.iter().map(|m| m.map(round_summary)).collect(),
            })
            .collect()
    }

    /// Rounded mean for one cell
    pub fn mean(&self, version: &str, threads: u32, os: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == os)?;
        let row = self
            .rows
            .iter()
            .position(|k| k.version == version && k.threads == threads)?;
        self.means[row][col].map(round_summary)
    }

    /// Bar groups for charting, in row order, with unrounded means
    pub fn bar_groups(&self) -> Vec<BarGroup> {
        self.rows
            .iter()
            .zip(&self.means)
            .map(|(key, means)| BarGroup {
                label: format!("{} ({} thr)", key.version, key.threads),
                bars: self
                    .columns
                    .iter()
                    .zip(means)
                    .filter_map(|(os, mean)| mean.map(|m| (os.clone(), m)))
                    .collect(),
            })
            .collect()
    }

    /// Largest mean in the table
    pub fn max_mean(&self) -> Option<f64> {
        self.means
            .iter()
            .flatten()
            .flatten()
            .copied()
            .reduce(f64::max)
    }
}

/// Round to the summary precision, half away from zero
pub fn round_summary(value: f64) -> f64 {
    let scale = 10f64.powi(SUMMARY_PRECISION);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(input: &str) -> SummaryTable {
        SummaryTable::from_results(&ResultSet::from_reader(input.as_bytes()).unwrap())
    }

    const SAMPLE: &str = "\
Version,Threads,OS,Time
mutex,2,linux,2.0
mutex,2,linux,3.0
mutex,2,windows,4.1234
mutex,10,linux,1.0
atomic,2,windows,0.5
mutex,2,windows,4.1240
";

    #[test]
    fn test_row_and_column_order() {
        let summary = table(SAMPLE);
        assert_eq!(summary.columns(), &["linux".to_string(), "windows".to_string()]);

        let keys: Vec<(String, u32)> = summary
            .rows()
            .into_iter()
            .map(|r| (r.version, r.threads))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("atomic".to_string(), 2),
                ("mutex".to_string(), 2),
                ("mutex".to_string(), 10),
            ]
        );
    }

    #[test]
    fn test_means() {
        let summary = table(SAMPLE);
        assert_eq!(summary.mean("mutex", 2, "linux"), Some(2.5));
        assert_eq!(summary.mean("mutex", 2, "windows"), Some(4.124));
        assert_eq!(summary.mean("mutex", 10, "linux"), Some(1.0));
        assert_eq!(summary.mean("atomic", 2, "windows"), Some(0.5));
    }

    #[test]
    fn test_missing_cells() {
        let summary = table(SAMPLE);
        assert_eq!(summary.mean("atomic", 2, "linux"), None);
        assert_eq!(summary.mean("mutex", 10, "windows"), None);
        assert_eq!(summary.mean("spinlock", 2, "linux"), None);
        assert_eq!(summary.mean("mutex", 2, "macos"), None);

        let rows = summary.rows();
        assert_eq!(rows[0].times, vec![None, Some(0.5)]);
    }

    #[test]
    fn test_bar_groups() {
        let groups = table(SAMPLE).bar_groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "atomic (2 thr)");
        assert_eq!(groups[0].bars, vec![("windows".to_string(), 0.5)]);
        assert_eq!(groups[2].label, "mutex (10 thr)");

        // bars keep full precision
        let (os, mean) = &groups[1].bars[1];
        assert_eq!(os, "windows");
        assert!((mean - 4.1237).abs() < 1e-9);
    }

    #[test]
    fn test_max_mean() {
        let summary = table(SAMPLE);
        assert!((summary.max_mean().unwrap() - 4.1237).abs() < 1e-9);
        assert!(SummaryTable::from_results(&ResultSet::new()).max_mean().is_none());
    }

    #[test]
    fn test_round_summary() {
        assert_eq!(round_summary(1.23449), 1.234);
        assert_eq!(round_summary(0.0006), 0.001);
        assert_eq!(round_summary(2.0), 2.0);
    }
}
