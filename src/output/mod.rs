//! Output formats for the benchmark summary

pub mod csv_export;
pub mod json_export;
pub mod markdown;

pub use csv_export::CsvExporter;
pub use json_export::JsonExporter;
pub use markdown::MarkdownExporter;
