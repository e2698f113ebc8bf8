//! Error types for SoulScript.

use thiserror::Error;

/// Top-level result type for SoulScript operations.
pub type Result<T> = std::result::Result<T, SoulError>;

/// Top-level error type for SoulScript.
#[derive(Debug, Error)]
pub enum SoulError {
    /// The submitted journal text was empty after trimming.
    #[error("Please write something before submitting!")]
    EmptyEntry,

    #[error("mood score {0} is outside the range [0, 10]")]
    InvalidMood(f64),

    #[error("unknown prompt {index}: choose a number between 1 and {available}")]
    UnknownPrompt { index: usize, available: usize },

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("corrupt journal record on line {line}: {reason}")]
    CorruptRecord { line: u64, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(String),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("json error: {0}")]
    Json(String),

    #[error("config error: {0}")]
    Config(String),
}

impl SoulError {
    /// Whether the error is a user-correctable validation failure rather than
    /// a storage or environment failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SoulError::EmptyEntry | SoulError::UnknownPrompt { .. } | SoulError::InvalidDate(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_displays_the_form_message() {
        assert_eq!(
            SoulError::EmptyEntry.to_string(),
            "Please write something before submitting!"
        );
    }

    #[test]
    fn errors_display_human_readable_messages() {
        let err = SoulError::CorruptRecord {
            line: 3,
            reason: "mood 11 out of range".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("mood 11"));

        let err = SoulError::UnknownPrompt {
            index: 9,
            available: 5,
        };
        assert!(err.to_string().contains("between 1 and 5"));
    }

    #[test]
    fn validation_errors_are_distinguished_from_io() {
        assert!(SoulError::EmptyEntry.is_validation());
        assert!(SoulError::InvalidDate("tomorrow".to_string()).is_validation());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!SoulError::from(io).is_validation());
    }
}
