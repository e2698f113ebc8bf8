//! # soul-vault
//!
//! Flat-file storage for the SoulScript journal.
//!
//! The journal is a single comma-separated file with the header
//! `Date,Entry,Mood` and one row per entry, in submission order. Rows are
//! only ever appended; nothing is rewritten or deleted.

pub mod store;

pub use store::{JournalStore, DEFAULT_FILE_NAME, HEADER};
