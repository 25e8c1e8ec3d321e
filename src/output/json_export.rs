//! JSON export of the summary pivot

use crate::summary::SummaryTable;
use anyhow::Result;
use serde_json::{json, Map, Value};
use std::fs::File;

pub struct JsonExporter;

impl JsonExporter {
    /// Build the JSON document for the pivot
    pub fn to_value(summary: &SummaryTable) -> Value {
        let rows: Vec<Value> = summary
            .rows()
            .into_iter()
            .map(|row| {
                let times: Map<String, Value> = summary
                    .columns()
                    .iter()
                    .zip(&row.times)
                    .map(|(os, time)| (os.clone(), json!(time)))
                    .collect();

                json!({
                    "version": row.version,
                    "threads": row.threads,
                    "times": times,
                })
            })
            .collect();

        json!({
            "unit": "seconds",
            "aggregate": "mean",
            "columns": summary.columns(),
            "rows": rows,
        })
    }

    /// Export the pivot to a JSON file
    pub fn export_summary(summary: &SummaryTable, path: &str) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &Self::to_value(summary))?;
        Ok(())
    }
}
