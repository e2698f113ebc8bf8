//! Weekly mood report: the current Monday–Sunday slice of the journal.

use chrono::NaiveDate;
use serde::Serialize;
use soul_core::error::Result;
use soul_core::mood::{mean_mood, round2, MoodOutcome};
use soul_core::record::JournalRecord;
use soul_core::week::WeekWindow;
use soul_vault::JournalStore;
use tracing::debug;

pub const REPORT_HEADING: &str = "Your Mood Analysis for the Current Week";
pub const NO_DATA_MESSAGE: &str = "No data found. Start journaling to see your mood trends!";
pub const EMPTY_WEEK_MESSAGE: &str = "No entries found for the current week (Monday to Sunday). Start journaling to track your mood trends!";
pub const TREND_INTRO: &str = "Here’s your mood trend for the current week (Monday to Sunday):";

/// What the mood report screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum WeeklyView {
    /// The journal file does not exist.
    NoData,
    /// The journal exists but has nothing in the current week.
    EmptyWeek { window: WeekWindow },
    Week(WeeklyReport),
}

impl WeeklyView {
    /// Build the view from already-loaded records.
    #[must_use]
    pub fn from_records(records: Vec<JournalRecord>, today: NaiveDate) -> Self {
        let window = WeekWindow::containing(today);
        match WeeklyReport::new(window, records) {
            Some(report) => WeeklyView::Week(report),
            None => WeeklyView::EmptyWeek { window },
        }
    }

    /// Status line for the two empty states, `None` when there is a report.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            WeeklyView::NoData => Some(NO_DATA_MESSAGE),
            WeeklyView::EmptyWeek { .. } => Some(EMPTY_WEEK_MESSAGE),
            WeeklyView::Week(_) => None,
        }
    }
}

/// Load the journal and build the view for the week containing `today`.
///
/// # Errors
///
/// Returns any storage error other than the journal file being absent.
pub fn weekly_view(store: &JournalStore, today: NaiveDate) -> Result<WeeklyView> {
    match store.load_if_exists()? {
        None => Ok(WeeklyView::NoData),
        Some(records) => Ok(WeeklyView::from_records(records, today)),
    }
}

/// A non-empty set of entries from one week, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    window: WeekWindow,
    entries: Vec<JournalRecord>,
    mean: f64,
}

impl WeeklyReport {
    /// Keep the records inside `window`, sorted by date (ties stay in file order).
    ///
    /// Returns `None` when no record falls inside the window, so an average is
    /// never computed over an empty set.
    #[must_use]
    pub fn new(window: WeekWindow, records: Vec<JournalRecord>) -> Option<Self> {
        let total = records.len();
        let mut entries: Vec<JournalRecord> = records
            .into_iter()
            .filter(|r| window.contains(r.date))
            .collect();
        entries.sort_by_key(|r| r.date);
        debug!(total, kept = entries.len(), %window, "filtered journal to week");

        let moods: Vec<f64> = entries.iter().map(|r| r.mood).collect();
        let mean = mean_mood(&moods)?;
        Some(Self {
            window,
            entries,
            mean,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[JournalRecord] {
        &self.entries
    }

    /// Mean mood of the week, two decimals.
    #[must_use]
    pub fn average(&self) -> f64 {
        round2(self.mean)
    }

    /// Classified on the unrounded mean.
    #[must_use]
    pub fn outcome(&self) -> MoodOutcome {
        MoodOutcome::classify(self.mean)
    }

    #[must_use]
    pub fn summary(&self) -> WeekSummary {
        let outcome = self.outcome();
        WeekSummary {
            week_start: self.window.start,
            week_end: self.window.end,
            entries: self
                .entries
                .iter()
                .map(|r| EntrySummary {
                    date: r.date,
                    mood: r.mood,
                    entry: r.entry.clone(),
                })
                .collect(),
            average: self.average(),
            outcome,
            message: outcome.weekly_message().to_string(),
        }
    }
}

/// Serializable form of a weekly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub entries: Vec<EntrySummary>,
    pub average: f64,
    pub outcome: MoodOutcome,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrySummary {
    pub date: NaiveDate,
    pub mood: f64,
    pub entry: String,
}
