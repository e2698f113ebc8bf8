//! # soul-report
//!
//! The two SoulScript screens as plain library calls:
//! - [`recorder`]: score a journal entry and append it to the journal
//! - [`weekly`]: filter the journal to the current Monday–Sunday week
//! - [`chart`] / [`svg`]: mood trend line charts (terminal and SVG)
//! - [`format`]: text, markdown, and JSON weekly listings
//!
//! Every operation takes the current date as a parameter; nothing here reads
//! the system clock.

pub mod chart;
pub mod format;
pub mod recorder;
pub mod svg;
pub mod weekly;

pub use format::{format_report, OutputFormat};
pub use recorder::{EntryRecorder, Submission};
pub use weekly::{weekly_view, WeekSummary, WeeklyReport, WeeklyView};
