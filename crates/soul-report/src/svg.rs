//! SVG export of the weekly mood trend.

use std::path::Path;

use plotters::prelude::*;
use soul_core::error::{Result, SoulError};
use soul_core::record::JournalRecord;
use tracing::info;

use crate::chart::{CHART_TITLE, SERIES_LABEL};

/// Pixel size of the exported chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOpts {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgOpts {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
        }
    }
}

/// Write a line chart of `entries` (one x position per entry, labelled with its
/// date) to `path`.
///
/// # Errors
///
/// Returns [`SoulError::Chart`] if there is nothing to plot or drawing fails.
pub fn write_svg(entries: &[JournalRecord], path: &Path, opts: &SvgOpts) -> Result<()> {
    if entries.is_empty() {
        return Err(SoulError::Chart("no entries to plot".to_string()));
    }
    draw(entries, path, opts).map_err(|e| SoulError::Chart(e.to_string()))?;
    info!(path = %path.display(), points = entries.len(), "wrote mood chart");
    Ok(())
}

fn draw(
    entries: &[JournalRecord],
    path: &Path,
    opts: &SvgOpts,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<String> = entries.iter().map(JournalRecord::date_label).collect();
    let count = i32::try_from(entries.len())?;

    let root = SVGBackend::new(path, (opts.width, opts.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d((0..count).into_segmented(), 0f64..10f64)?;

    let format_x = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&format_x)
        .x_desc("Date")
        .y_desc(SERIES_LABEL)
        .draw()?;

    let points: Vec<(SegmentValue<i32>, f64)> = (0..count)
        .zip(entries)
        .map(|(i, r)| (SegmentValue::CenterOf(i), r.mood))
        .collect();

    chart
        .draw_series(LineSeries::new(points.clone(), &BLUE))?
        .label(SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, 4, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, mood: f64) -> JournalRecord {
        JournalRecord::new(NaiveDate::from_ymd_opt(2025, 2, day).unwrap(), "x", mood).unwrap()
    }

    #[test]
    fn writes_svg_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mood.svg");
        write_svg(
            &[record(10, 4.0), record(12, 7.5), record(13, 9.0)],
            &path,
            &SvgOpts::default(),
        )
        .unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains("2025-02-12"));
    }

    #[test]
    fn refuses_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mood.svg");
        assert!(matches!(
            write_svg(&[], &path, &SvgOpts::default()),
            Err(SoulError::Chart(_))
        ));
        assert!(!path.exists());
    }
}
