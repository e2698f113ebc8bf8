//! Calendar week windows (ISO convention, Monday first).

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::record::DATE_FORMAT;

/// The Monday–Sunday range containing a given day, inclusive of both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The week containing `today`.
    #[must_use]
    pub fn containing(today: NaiveDate) -> Self {
        let offset = i64::from(today.weekday().num_days_from_monday());
        let start = today - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Whether `date` falls on or between Monday and Sunday of this week.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}
