//! Word-list sentiment analyzer with negation and intensifier handling.

use std::collections::HashMap;

use super::PolarityAnalyzer;

/// Negation reaches at most this many tokens ahead.
const NEGATION_WINDOW: usize = 3;

/// Negated sentiment flips sign and keeps half its strength.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "hardly", "barely",
    "without", "cannot",
];

/// A sentiment lexicon mapping lowercase words to values in `[-1, 1]`.
///
/// Words are matched case-insensitively; curly and straight apostrophes are
/// treated the same.
///
/// # Example
///
/// ```
/// use soul_core::sentiment::{PolarityAnalyzer, SentimentLexicon};
///
/// let mut lexicon = SentimentLexicon::new();
/// lexicon.add_positive("sunny", 0.6);
/// lexicon.add_negative("gloomy", 0.6);
///
/// assert!(lexicon.polarity("A sunny morning") > 0.0);
/// assert!(lexicon.polarity("A gloomy morning") < 0.0);
/// assert_eq!(lexicon.polarity(""), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Create an empty lexicon with no words and no intensifiers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
            intensifiers: HashMap::new(),
        }
    }

    /// Add a positive word with intensity in `[0, 1]`.
    pub fn add_positive(&mut self, word: &str, intensity: f64) {
        self.words
            .insert(normalize(word), intensity.clamp(0.0, 1.0));
    }

    /// Add a negative word with intensity in `[0, 1]` (stored negated).
    pub fn add_negative(&mut self, word: &str, intensity: f64) {
        self.words
            .insert(normalize(word), -intensity.clamp(0.0, 1.0));
    }

    /// Add an intensifier that scales the next sentiment word by `factor`.
    ///
    /// Factors below 1.0 act as diminishers ("slightly").
    pub fn add_intensifier(&mut self, word: &str, factor: f64) {
        self.intensifiers
            .insert(normalize(word), factor.clamp(0.0, 2.0));
    }

    /// Sentiment value of a single word, `None` if unknown.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(&normalize(word)).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&normalize(word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Adjusted sentiment values of every matched word, in text order.
    ///
    /// Exposed for diagnostics; [`PolarityAnalyzer::polarity`] is their mean.
    #[must_use]
    pub fn matches(&self, text: &str) -> Vec<(String, f64)> {
        let mut found = Vec::new();
        let mut scale = 1.0;
        // Tokens remaining in which a negation still applies.
        let mut negation_left = 0usize;

        for token in tokenize(text) {
            if is_negator(&token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(&token) {
                scale *= factor;
                continue;
            }
            if let Some(&value) = self.words.get(&token) {
                let mut adjusted = (value * scale).clamp(-1.0, 1.0);
                if negation_left > 0 {
                    adjusted *= NEGATION_FACTOR;
                }
                found.push((token, adjusted));
                negation_left = 0;
                scale = 1.0;
                continue;
            }
            scale = 1.0;
            negation_left = negation_left.saturating_sub(1);
        }

        found
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        super::default_words::default_lexicon()
    }
}

impl PolarityAnalyzer for SentimentLexicon {
    fn polarity(&self, text: &str) -> f64 {
        let found = self.matches(text);
        if found.is_empty() {
            return 0.0;
        }
        let sum: f64 = found.iter().map(|(_, v)| v).sum();
        (sum / found.len() as f64).clamp(-1.0, 1.0)
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace('’', "'")
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

/// Split on anything that is neither a letter nor an apostrophe inside a word.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '’'))
        .map(|raw| normalize(raw).trim_matches('\'').to_string())
        .filter(|token| !token.is_empty())
}
