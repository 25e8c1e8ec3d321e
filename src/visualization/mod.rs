//! Visualization and plotting

pub mod bar_chart;

pub use bar_chart::BarChartPlotter;
