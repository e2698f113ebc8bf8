//! Sentiment polarity analysis.
//!
//! The mood score only needs a polarity in `[-1, 1]`, so any analyzer can be
//! plugged in through [`PolarityAnalyzer`]. [`SentimentLexicon`] is the default
//! word-list implementation.
//!
//! # Example
//!
//! ```
//! use soul_core::sentiment::{PolarityAnalyzer, SentimentLexicon};
//! use soul_core::score_from_polarity;
//!
//! let lexicon = SentimentLexicon::default();
//! let polarity = lexicon.polarity("I am thrilled today!");
//!
//! assert!(score_from_polarity(polarity) > 5.0);
//! ```

mod default_words;
mod lexicon;

pub use lexicon::SentimentLexicon;

/// Anything that turns free text into a polarity in `[-1, 1]`.
///
/// `-1` is maximally negative, `0` neutral, `+1` maximally positive.
/// Empty or unrecognised text should yield `0.0`.
pub trait PolarityAnalyzer {
    fn polarity(&self, text: &str) -> f64;
}

impl<A: PolarityAnalyzer + ?Sized> PolarityAnalyzer for &A {
    fn polarity(&self, text: &str) -> f64 {
        (**self).polarity(text)
    }
}

impl<A: PolarityAnalyzer + ?Sized> PolarityAnalyzer for Box<A> {
    fn polarity(&self, text: &str) -> f64 {
        (**self).polarity(text)
    }
}
