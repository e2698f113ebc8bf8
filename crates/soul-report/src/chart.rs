//! Terminal line chart of mood over the week.
//!
//! One column per entry in chronological order, y axis fixed to the full
//! 0–10 mood range, points drawn as markers and joined by interpolated dots.

use soul_core::mood::{MAX_MOOD, MIN_MOOD};
use soul_core::record::JournalRecord;

pub const CHART_TITLE: &str = "Mood Trend for the Current Week";
pub const SERIES_LABEL: &str = "Mood Score";

const MARKER: char = '●';
const TRACE: char = '·';
/// Wide enough for a `YYYY-MM-DD` label plus spacing.
const COLUMN_WIDTH: usize = 12;
const MIN_HEIGHT: usize = 3;

/// Options for the terminal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOpts {
    /// Number of plot rows between 10 (top) and 0 (bottom), inclusive.
    pub height: usize,
}

impl Default for ChartOpts {
    fn default() -> Self {
        Self { height: 11 }
    }
}

/// Render `entries` as a line chart. Returns an empty string for no entries.
#[must_use]
pub fn render_chart(entries: &[JournalRecord], opts: &ChartOpts) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let height = opts.height.max(MIN_HEIGHT);
    let width = entries.len() * COLUMN_WIDTH;
    let mut grid = vec![vec![' '; width]; height];

    let points: Vec<(usize, usize)> = entries
        .iter()
        .enumerate()
        .map(|(i, r)| (i * COLUMN_WIDTH + COLUMN_WIDTH / 2, row_for(r.mood, height)))
        .collect();

    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        for x in x0 + 1..x1 {
            let t = (x - x0) as f64 / (x1 - x0) as f64;
            let y = (y0 as f64 + (y1 as f64 - y0 as f64) * t).round() as usize;
            grid[y][x] = TRACE;
        }
    }
    for &(x, y) in &points {
        grid[y][x] = MARKER;
    }

    let mut output = String::new();
    output.push_str(&format!("{:^w$}\n", CHART_TITLE, w = width + 8));

    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 || row == height - 1 || row == (height - 1) / 2 {
            format!("{:>5.1} ┤", value_for(row, height))
        } else {
            "      │".to_string()
        };
        output.push_str(&label);
        output.extend(cells.iter());
        output.push('\n');
    }

    output.push_str("      └");
    output.push_str(&"─".repeat(width));
    output.push('\n');

    output.push_str("       ");
    for record in entries {
        output.push_str(&format!("{:^w$}", record.date_label(), w = COLUMN_WIDTH));
    }
    output.push('\n');
    output.push_str(&format!("{:^w$}\n", "Date", w = width + 8));
    output.push_str(&format!("       {MARKER} {SERIES_LABEL}\n"));

    output
}

/// Grid row for a mood value; row 0 is the top (10).
fn row_for(mood: f64, height: usize) -> usize {
    let mood = mood.clamp(MIN_MOOD, MAX_MOOD);
    let fraction = (MAX_MOOD - mood) / (MAX_MOOD - MIN_MOOD);
    (fraction * (height - 1) as f64).round() as usize
}

fn value_for(row: usize, height: usize) -> f64 {
    MAX_MOOD - (MAX_MOOD - MIN_MOOD) * row as f64 / (height - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, mood: f64) -> JournalRecord {
        JournalRecord::new(NaiveDate::from_ymd_opt(2025, 2, day).unwrap(), "x", mood).unwrap()
    }

    fn plot_rows(chart: &str) -> Vec<&str> {
        chart
            .lines()
            .filter(|l| l.contains('┤') || l.contains('│'))
            .collect()
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_chart(&[], &ChartOpts::default()), "");
    }

    #[test]
    fn chart_has_title_axis_labels_and_legend() {
        let chart = render_chart(&[record(10, 6.0), record(12, 8.0)], &ChartOpts::default());
        assert!(chart.contains(CHART_TITLE));
        assert!(chart.contains("2025-02-10"));
        assert!(chart.contains("2025-02-12"));
        assert!(chart.contains("Date"));
        assert!(chart.contains("● Mood Score"));
        assert!(chart.contains("10.0 ┤"));
        assert!(chart.contains(" 0.0 ┤"));
    }

    #[test]
    fn one_marker_per_entry() {
        let entries = [record(10, 2.0), record(11, 5.0), record(13, 9.5)];
        let chart = render_chart(&entries, &ChartOpts::default());
        let markers: usize = plot_rows(&chart)
            .iter()
            .map(|l| l.matches(MARKER).count())
            .sum();
        assert_eq!(markers, 3);
    }

    #[test]
    fn extremes_land_on_top_and_bottom_rows() {
        let chart = render_chart(&[record(10, 10.0), record(11, 0.0)], &ChartOpts::default());
        let rows = plot_rows(&chart);
        assert_eq!(rows.len(), 11);
        assert!(rows[0].contains(MARKER));
        assert!(rows[10].contains(MARKER));
    }

    #[test]
    fn consecutive_points_are_connected() {
        let chart = render_chart(&[record(10, 10.0), record(11, 0.0)], &ChartOpts::default());
        assert!(chart.contains(TRACE));
    }

    #[test]
    fn height_has_a_floor() {
        let chart = render_chart(&[record(10, 5.0)], &ChartOpts { height: 1 });
        assert_eq!(plot_rows(&chart).len(), MIN_HEIGHT);
    }

    #[test]
    fn row_mapping() {
        assert_eq!(row_for(10.0, 11), 0);
        assert_eq!(row_for(0.0, 11), 10);
        assert_eq!(row_for(5.0, 11), 5);
        assert_eq!(row_for(7.5, 11), 3);
    }
}
