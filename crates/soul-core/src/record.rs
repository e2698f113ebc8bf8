//! Journal record: one row of the journal file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, SoulError};
use crate::mood::{round2, MAX_MOOD, MIN_MOOD};

/// Calendar date format used on disk and in every report.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single journal entry with its mood score.
///
/// Field names serialize as the on-disk header `Date,Entry,Mood`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Raw entry text exactly as submitted (not trimmed).
    #[serde(rename = "Entry")]
    pub entry: String,

    /// Mood score in `[0, 10]`, two decimals.
    #[serde(rename = "Mood", serialize_with = "serialize_mood")]
    pub mood: f64,
}

fn serialize_mood<S: Serializer>(mood: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{mood:.2}"))
}

impl JournalRecord {
    /// Create a record, rounding the mood to two decimals.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::InvalidMood`] if the mood is not finite or lies outside `[0, 10]`.
    pub fn new(date: NaiveDate, entry: impl Into<String>, mood: f64) -> Result<Self> {
        let record = Self {
            date,
            entry: entry.into(),
            mood: round2(mood),
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the mood invariant on a record that did not come through [`JournalRecord::new`].
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::InvalidMood`] if the mood is not finite or lies outside `[0, 10]`.
    pub fn validate(&self) -> Result<()> {
        if !self.mood.is_finite() || !(MIN_MOOD..=MAX_MOOD).contains(&self.mood) {
            return Err(SoulError::InvalidMood(self.mood));
        }
        Ok(())
    }

    /// The date rendered as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`SoulError::InvalidDate`] if the input is not a valid date in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| SoulError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_rounds_mood() {
        let record = JournalRecord::new(date(2025, 3, 4), "ok", 6.666_666).unwrap();
        assert_eq!(record.mood, 6.67);
    }

    #[test]
    fn new_rejects_out_of_range_mood() {
        assert!(matches!(
            JournalRecord::new(date(2025, 3, 4), "x", 10.5),
            Err(SoulError::InvalidMood(_))
        ));
        assert!(JournalRecord::new(date(2025, 3, 4), "x", -0.1).is_err());
        assert!(JournalRecord::new(date(2025, 3, 4), "x", f64::INFINITY).is_err());
        assert!(JournalRecord::new(date(2025, 3, 4), "x", 0.0).is_ok());
        assert!(JournalRecord::new(date(2025, 3, 4), "x", 10.0).is_ok());
    }

    #[test]
    fn entry_text_is_kept_verbatim() {
        let record = JournalRecord::new(date(2025, 3, 4), "  spaced, out\n", 5.0).unwrap();
        assert_eq!(record.entry, "  spaced, out\n");
    }

    #[test]
    fn serializes_with_header_names_and_fixed_decimals() {
        let record = JournalRecord::new(date(2025, 1, 9), "hello", 7.5).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Date"], "2025-01-09");
        assert_eq!(json["Entry"], "hello");
        assert_eq!(json["Mood"], "7.50");
    }

    #[test]
    fn date_label_is_iso() {
        let record = JournalRecord::new(date(2024, 12, 30), "x", 1.0).unwrap();
        assert_eq!(record.date_label(), "2024-12-30");
    }

    #[test]
    fn parse_date_accepts_iso_only() {
        assert_eq!(parse_date("2025-02-10").unwrap(), date(2025, 2, 10));
        assert_eq!(parse_date(" 2025-02-10 ").unwrap(), date(2025, 2, 10));
        assert!(matches!(
            parse_date("10/02/2025"),
            Err(SoulError::InvalidDate(_))
        ));
        assert!(parse_date("2025-02-30").is_err());
    }
}
