//! Grouped bar chart of execution time per (Version, Threads) and OS

use crate::error::ReportError;
use crate::summary::SummaryTable;
use anyhow::Result;
use plotters::prelude::*;

/// Output image size in pixels
pub const CHART_SIZE: (u32, u32) = (2000, 1000);

/// Heading of the legend
pub const LEGEND_TITLE: &str = "Operating System";

/// Share of each group slot covered by bars
const GROUP_WIDTH: f64 = 0.8;

/// Hue palette, one colour per operating system
const PALETTE: [RGBColor; 10] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
    RGBColor(218, 139, 195),
    RGBColor(140, 140, 140),
    RGBColor(204, 185, 116),
    RGBColor(100, 181, 205),
];

pub struct BarChartPlotter;

impl BarChartPlotter {
    /// Plot mean execution time, one bar group per summary row and one hue per OS
    pub fn plot(summary: &SummaryTable, path: &str) -> Result<()> {
        if summary.is_empty() {
            return Err(ReportError::EmptyDataset.into());
        }

        let groups = summary.bar_groups();
        let columns = summary.columns();
        let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();

        let max_time = summary.max_mean().unwrap_or(0.0);
        let y_max = if max_time > 0.0 { max_time * 1.1 } else { 1.0 };

        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        // Group centres sit on integer positions, one tick per group.
        let x_range = -0.5f64..groups.len() as f64 - 0.5;

        let mut chart = ChartBuilder::on(&root)
            .caption("Sieve Benchmark Performance Comparison", ("sans-serif", 40))
            .margin(20)
            .x_label_area_size(200)
            .y_label_area_size(90)
            .build_cartesian_2d(x_range, 0f64..y_max)?;

        let label_for = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(groups.len())
            .x_desc("Version (Threads)")
            .y_desc("Execution Time (seconds)")
            .axis_desc_style(("sans-serif", 28))
            .x_label_style(
                ("sans-serif", 18.0)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_style(("sans-serif", 18))
            .x_label_formatter(&label_for)
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;

        let bar_width = GROUP_WIDTH / columns.len() as f64;

        // Legend heading, drawn as an entry without a marker
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(LEGEND_TITLE)
            .legend(|(x, y)| EmptyElement::at((x, y)));

        for (col, os) in columns.iter().enumerate() {
            let color = PALETTE[col % PALETTE.len()];

            let bars: Vec<Rectangle<(f64, f64)>> = groups
                .iter()
                .enumerate()
                .filter_map(|(idx, group)| {
                    let (_, time) = group.bars.iter().find(|(name, _)| name == os)?;
                    let x0 = idx as f64 - GROUP_WIDTH / 2.0 + col as f64 * bar_width;
                    Some(Rectangle::new(
                        [(x0, 0.0), (x0 + bar_width, *time)],
                        color.filled(),
                    ))
                })
                .collect();

            chart
                .draw_series(bars)?
                .label(os.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 20, y + 8)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 22))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        tracing::debug!("Rendered {} bar groups to {}", groups.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultSet;
    use tempfile::tempdir;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_plot_creates_png() {
        let input = "\
Version,Threads,OS,Time
mutex,1,linux,4.0
mutex,1,windows,4.5
mutex,4,linux,1.5
atomic,4,windows,0.9
";
        let summary =
            SummaryTable::from_results(&ResultSet::from_reader(input.as_bytes()).unwrap());

        let dir = tempdir().unwrap();
        let path = dir.path().join("results_chart.png");
        BarChartPlotter::plot(&summary, path.to_str().unwrap()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_plot_empty_summary() {
        let summary = SummaryTable::from_results(&ResultSet::new());

        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let err = BarChartPlotter::plot(&summary, path.to_str().unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::EmptyDataset)
        ));
        assert!(!path.exists());
    }
}
