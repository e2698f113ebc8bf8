//! Writing modes and the fixed prompt list.
//!
//! Prompts are only displayed to the writer; they are never stored with the entry.

use std::fmt;

use crate::error::{Result, SoulError};

/// The prompts offered in prompt-based mode, in display order.
pub const PROMPTS: [&str; 5] = [
    "Describe something that made you smile today.",
    "What’s been on your mind lately?",
    "If you could change one thing about your day, what would it be?",
    "What are three things you’re grateful for?",
    "Write about a challenge you overcame recently.",
];

/// How the writer wants to start an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritingMode {
    /// No prompt shown.
    #[default]
    FreeWrite,
    /// Zero-based index into [`PROMPTS`].
    Prompted(usize),
}

impl WritingMode {
    /// Labels for the mode selector, in variant order.
    pub const LABELS: [&'static str; 2] = ["Write What's on My Mind", "Give Me a Prompt"];

    /// Build a prompted mode from a one-based prompt number as typed by a user.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::UnknownPrompt`] if `number` is not in `1..=PROMPTS.len()`.
    pub fn from_prompt_number(number: usize) -> Result<Self> {
        if number == 0 || number > PROMPTS.len() {
            return Err(SoulError::UnknownPrompt {
                index: number,
                available: PROMPTS.len(),
            });
        }
        Ok(WritingMode::Prompted(number - 1))
    }

    /// The prompt text for this mode, `None` in free-write mode.
    ///
    /// # Errors
    ///
    /// Returns [`SoulError::UnknownPrompt`] if a prompted mode carries an out-of-range index.
    pub fn prompt(&self) -> Result<Option<&'static str>> {
        match *self {
            WritingMode::FreeWrite => Ok(None),
            WritingMode::Prompted(index) => PROMPTS
                .get(index)
                .copied()
                .map(Some)
                .ok_or(SoulError::UnknownPrompt {
                    index: index + 1,
                    available: PROMPTS.len(),
                }),
        }
    }
}

impl fmt::Display for WritingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WritingMode::FreeWrite => f.write_str(Self::LABELS[0]),
            WritingMode::Prompted(_) => f.write_str(Self::LABELS[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_write_has_no_prompt() {
        assert_eq!(WritingMode::FreeWrite.prompt().unwrap(), None);
        assert_eq!(WritingMode::default(), WritingMode::FreeWrite);
    }

    #[test]
    fn prompt_numbers_are_one_based() {
        let mode = WritingMode::from_prompt_number(1).unwrap();
        assert_eq!(mode, WritingMode::Prompted(0));
        assert_eq!(mode.prompt().unwrap(), Some(PROMPTS[0]));

        let last = WritingMode::from_prompt_number(5).unwrap();
        assert_eq!(
            last.prompt().unwrap(),
            Some("Write about a challenge you overcame recently.")
        );
    }

    #[test]
    fn out_of_range_prompt_is_rejected() {
        assert!(matches!(
            WritingMode::from_prompt_number(0),
            Err(SoulError::UnknownPrompt { index: 0, .. })
        ));
        assert!(WritingMode::from_prompt_number(6).is_err());
        assert!(WritingMode::Prompted(5).prompt().is_err());
    }

    #[test]
    fn display_uses_selector_labels() {
        assert_eq!(WritingMode::FreeWrite.to_string(), "Write What's on My Mind");
        assert_eq!(WritingMode::Prompted(2).to_string(), "Give Me a Prompt");
    }
}
