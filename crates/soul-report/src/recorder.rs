//! Journal entry submission: validate, score, append.

use chrono::NaiveDate;
use soul_core::error::{Result, SoulError};
use soul_core::mood::{score_from_polarity, MoodOutcome};
use soul_core::record::JournalRecord;
use soul_core::sentiment::PolarityAnalyzer;
use soul_vault::JournalStore;
use tracing::{debug, warn};

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The record exactly as it was appended.
    pub record: JournalRecord,
    pub outcome: MoodOutcome,
}

impl Submission {
    #[must_use]
    pub fn score(&self) -> f64 {
        self.record.mood
    }

    /// Encouragement or warning shown with the score.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.outcome.entry_message()
    }
}

/// Scores journal text and appends it to a store.
pub struct EntryRecorder<'a, A> {
    store: &'a JournalStore,
    analyzer: A,
}

impl<'a, A: PolarityAnalyzer> EntryRecorder<'a, A> {
    pub fn new(store: &'a JournalStore, analyzer: A) -> Self {
        Self { store, analyzer }
    }

    /// Mood score for `text` without recording anything.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        score_from_polarity(self.analyzer.polarity(text))
    }

    /// Submit an entry written on `today`.
    ///
    /// Appends exactly one record on success. The raw text is stored as typed;
    /// only the emptiness check trims it.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::EmptyEntry`] (nothing written) if `text` is empty or
    /// whitespace only, or any storage error from [`JournalStore::append`].
    pub fn submit(&self, text: &str, today: NaiveDate) -> Result<Submission> {
        if text.trim().is_empty() {
            warn!("rejected empty journal entry");
            return Err(SoulError::EmptyEntry);
        }

        let score = self.score(text);
        let record = JournalRecord::new(today, text, score)?;
        debug!(score, date = %today, "scored journal entry");

        self.store.append(&record)?;

        Ok(Submission {
            outcome: MoodOutcome::classify(record.mood),
            record,
        })
    }
}
