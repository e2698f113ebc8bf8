//! # soul-core
//!
//! Core types, sentiment scoring, and mood policy for SoulScript.
//!
//! This crate defines the foundational types used across all other SoulScript crates:
//! - [`JournalRecord`]: one persisted `(Date, Entry, Mood)` row
//! - Sentiment analysis ([`PolarityAnalyzer`], [`SentimentLexicon`])
//! - Mood policy ([`score_from_polarity`], [`MoodOutcome`])
//! - Calendar weeks ([`WeekWindow`])
//! - Writing prompts ([`WritingMode`], [`PROMPTS`])
//! - Error hierarchy ([`SoulError`])

pub mod error;
pub mod mood;
pub mod prompt;
pub mod record;
pub mod sentiment;
pub mod week;

pub use error::{Result, SoulError};
pub use mood::{mean_mood, round2, score_from_polarity, MoodOutcome, LOW_MOOD_THRESHOLD};
pub use prompt::{WritingMode, PROMPTS};
pub use record::{parse_date, JournalRecord, DATE_FORMAT};
pub use sentiment::{PolarityAnalyzer, SentimentLexicon};
pub use week::WeekWindow;
