//! The Journal Entry and Mood Report screens, rendered to any writer.
//!
//! Both the subcommands and the interactive menu go through these functions.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use soul_core::prompt::WritingMode;
use soul_core::sentiment::SentimentLexicon;
use soul_report::chart::{render_chart, ChartOpts};
use soul_report::svg::{write_svg, SvgOpts};
use soul_report::weekly::{weekly_view, REPORT_HEADING, TREND_INTRO};
use soul_report::{
    format_report, EntryRecorder, OutputFormat, Submission, WeeklyReport, WeeklyView,
};
use soul_vault::JournalStore;

pub const APP_TITLE: &str = "SoulScript";
pub const WELCOME: &str = "Welcome to SoulScript: Your Journaling and Mood Tracker";
pub const JOURNAL_HEADING: &str = "Write Your Journal";
pub const METRIC_LABEL: &str = "Mood Score (out of 10):";

/// Everything a screen needs; no screen reads the clock or global state.
#[derive(Debug, Clone)]
pub struct Session {
    pub store: JournalStore,
    pub today: NaiveDate,
    pub chart: ChartOpts,
    pub svg: SvgOpts,
}

/// Print the journal heading and, in prompted mode, the chosen prompt.
pub fn journal_heading<W: Write>(out: &mut W, mode: WritingMode) -> Result<()> {
    writeln!(out, "{JOURNAL_HEADING}")?;
    if let Some(prompt) = mode.prompt()? {
        writeln!(out, "Prompt: {prompt}")?;
    }
    Ok(())
}

/// Submit an entry and print the score metric and feedback.
///
/// # Errors
///
/// Propagates [`soul_core::SoulError::EmptyEntry`] untouched so callers can
/// treat it as a recoverable validation failure.
pub fn submit_entry<W: Write>(out: &mut W, session: &Session, text: &str) -> Result<Submission> {
    let recorder = EntryRecorder::new(&session.store, SentimentLexicon::default());
    let submission = recorder.submit(text, session.today)?;

    writeln!(out, "{METRIC_LABEL} {:.2}", submission.score())?;
    writeln!(out, "{}", submission.message())?;
    Ok(submission)
}

/// Print the mood report screen.
///
/// With `generate`, the full listing follows the chart. JSON output is
/// emitted alone so it can be piped.
pub fn mood_report<W: Write>(
    out: &mut W,
    session: &Session,
    generate: bool,
    format: OutputFormat,
    svg_path: Option<&Path>,
) -> Result<WeeklyView> {
    let view = weekly_view(&session.store, session.today)?;

    if format == OutputFormat::Json {
        match &view {
            WeeklyView::Week(report) => writeln!(out, "{}", format_report(report, format)?)?,
            other => {
                let message = other.empty_message().unwrap_or_default();
                let body = serde_json::json!({ "entries": [], "message": message });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            }
        }
        return Ok(view);
    }

    if let Some(report) = report_overview(out, session, &view, svg_path)? {
        if generate {
            report_listing(out, report, format)?;
        }
    }
    Ok(view)
}

/// Print the report heading and either the trend chart or the empty-state
/// message.
///
/// Returns the report when there is one, i.e. when a listing can be offered.
pub fn report_overview<'v, W: Write>(
    out: &mut W,
    session: &Session,
    view: &'v WeeklyView,
    svg_path: Option<&Path>,
) -> Result<Option<&'v WeeklyReport>> {
    writeln!(out, "{REPORT_HEADING}")?;
    let report = match view {
        WeeklyView::Week(report) => report,
        other => {
            writeln!(out, "{}", other.empty_message().unwrap_or_default())?;
            return Ok(None);
        }
    };

    writeln!(out, "{TREND_INTRO}")?;
    writeln!(out)?;
    write!(out, "{}", render_chart(report.entries(), &session.chart))?;

    if let Some(path) = svg_path {
        write_svg(report.entries(), path, &session.svg)?;
        writeln!(out, "Chart saved to {}", path.display())?;
    }
    Ok(Some(report))
}

/// Print the full listing of a weekly report.
pub fn report_listing<W: Write>(
    out: &mut W,
    report: &WeeklyReport,
    format: OutputFormat,
) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", format_report(report, format)?)?;
    Ok(())
}
