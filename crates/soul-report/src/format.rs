//! Weekly report listing: text, markdown, and JSON output.

use soul_core::error::{Result, SoulError};

use crate::weekly::WeeklyReport;

pub const LISTING_HEADING: &str = "Text Report of Your Entries:";
pub const AVERAGE_LABEL: &str = "Average Mood Score for the Current Week:";

/// Output format for the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Format the full listing of a weekly report: every entry, then the average
/// and its interpretation.
///
/// # Errors
///
/// Returns [`SoulError::Json`] if the JSON summary cannot be serialised.
pub fn format_report(report: &WeeklyReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Markdown => Ok(format_markdown(report)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_text(report: &WeeklyReport) -> String {
    let mut output = String::new();
    output.push_str(LISTING_HEADING);
    output.push_str("\n\n");

    for record in report.entries() {
        output.push_str(&format!("Date: {}\n", record.date_label()));
        output.push_str(&format!("Mood Score: {:.2}\n", record.mood));
        output.push_str(&format!("Journal Entry: {}\n\n", record.entry));
    }

    output.push_str(&format!("{AVERAGE_LABEL} {:.2}\n", report.average()));
    output.push_str(report.outcome().weekly_message());
    output.push('\n');
    output
}

fn format_markdown(report: &WeeklyReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("### {LISTING_HEADING}\n\n"));

    for record in report.entries() {
        output.push_str(&format!("**Date**: {}\n\n", record.date_label()));
        output.push_str(&format!("**Mood Score**: {:.2}\n\n", record.mood));
        output.push_str(&format!("**Journal Entry**: {}\n\n", record.entry));
    }

    output.push_str(&format!("### {AVERAGE_LABEL} {:.2}\n\n", report.average()));
    output.push_str(&format!("> {}\n", report.outcome().weekly_message()));
    output
}

fn format_json(report: &WeeklyReport) -> Result<String> {
    serde_json::to_string_pretty(&report.summary()).map_err(|e| SoulError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use soul_core::record::JournalRecord;
    use soul_core::week::WeekWindow;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
    }

    fn sample_report() -> WeeklyReport {
        WeeklyReport::new(
            WeekWindow::containing(date(12)),
            vec![
                JournalRecord::new(date(12), "Walked by the river", 7.5).unwrap(),
                JournalRecord::new(date(10), "Rainy, tired", 3.5).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn text_lists_entries_in_date_order_then_average() {
        let output = format_report(&sample_report(), OutputFormat::Text).unwrap();
        let first = output.find("2025-02-10").unwrap();
        let second = output.find("2025-02-12").unwrap();
        assert!(first < second);
        assert!(output.contains("Mood Score: 3.50"));
        assert!(output.contains("Journal Entry: Walked by the river"));
        assert!(output.contains("Average Mood Score for the Current Week: 5.50"));
        assert!(output.trim_end().ends_with("Keep up the great work!"));
    }

    #[test]
    fn markdown_uses_bold_labels() {
        let output = format_report(&sample_report(), OutputFormat::Markdown).unwrap();
        assert!(output.starts_with("### Text Report of Your Entries:"));
        assert!(output.contains("**Date**: 2025-02-10"));
        assert!(output.contains("**Mood Score**: 7.50"));
        assert!(output.contains("> Your mood has been positive this week!"));
    }

    #[test]
    fn json_is_parseable() {
        let output = format_report(&sample_report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["average"], 5.5);
        assert_eq!(parsed["entries"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["entries"][0]["date"], "2025-02-10");
    }
}
