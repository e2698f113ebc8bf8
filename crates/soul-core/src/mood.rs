//! Mood scoring and the low/positive mood policy.
//!
//! A polarity in `[-1, 1]` maps linearly onto a mood score in `[0, 10]`:
//! `score = round((polarity + 1) * 5, 2)`. Both the entry recorder and the
//! weekly reporter classify scores through [`MoodOutcome::classify`].

use serde::{Deserialize, Serialize};

/// Scores strictly below this value are classified as [`MoodOutcome::Low`].
pub const LOW_MOOD_THRESHOLD: f64 = 5.0;

/// Lowest possible mood score.
pub const MIN_MOOD: f64 = 0.0;

/// Highest possible mood score.
pub const MAX_MOOD: f64 = 10.0;

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map a sentiment polarity onto the 0–10 mood scale.
///
/// Polarity is clamped into `[-1, 1]` first so a misbehaving analyzer can never
/// produce a score outside `[0, 10]`.
#[must_use]
pub fn score_from_polarity(polarity: f64) -> f64 {
    let polarity = if polarity.is_nan() {
        0.0
    } else {
        polarity.clamp(-1.0, 1.0)
    };
    round2((polarity + 1.0) * 5.0)
}

/// Arithmetic mean of mood scores, unrounded.
///
/// Classify the unrounded mean and round only for display; a mean of 4.997
/// is low even though it prints as 5.00.
///
/// Returns `None` for an empty slice; callers short-circuit to an empty state
/// instead of dividing by zero.
#[must_use]
pub fn mean_mood(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().sum();
    Some(sum / scores.len() as f64)
}

/// Outcome of the mood policy for a single score or a weekly average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodOutcome {
    Low,
    Positive,
}

impl MoodOutcome {
    /// Classify a score against [`LOW_MOOD_THRESHOLD`].
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score < LOW_MOOD_THRESHOLD {
            MoodOutcome::Low
        } else {
            MoodOutcome::Positive
        }
    }

    /// Feedback shown after a single journal entry is scored.
    #[must_use]
    pub fn entry_message(self) -> &'static str {
        match self {
            MoodOutcome::Low => {
                "It seems you’re feeling low. Try reaching out to a friend or doing something uplifting!"
            }
            MoodOutcome::Positive => "Great mood! Keep spreading positivity!",
        }
    }

    /// Interpretation shown under the weekly average.
    #[must_use]
    pub fn weekly_message(self) -> &'static str {
        match self {
            MoodOutcome::Low => {
                "Your mood over the current week seems a bit low. Consider taking some time for self-care."
            }
            MoodOutcome::Positive => {
                "Your mood has been positive this week! Keep up the great work!"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn score_anchors_match_the_linear_transform() {
        assert_eq!(score_from_polarity(-1.0), 0.0);
        assert_eq!(score_from_polarity(0.0), 5.0);
        assert_eq!(score_from_polarity(1.0), 10.0);
        assert_eq!(score_from_polarity(0.5), 7.5);
        assert_eq!(score_from_polarity(-0.25), 3.75);
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        // (0.123456 + 1) * 5 = 5.61728
        assert_eq!(score_from_polarity(0.123456), 5.62);
        // (-0.3333 + 1) * 5 = 3.3335
        assert!((score_from_polarity(-0.3333) - 3.33).abs() < 0.011);
    }

    #[test]
    fn score_clamps_out_of_range_polarity() {
        assert_eq!(score_from_polarity(3.0), 10.0);
        assert_eq!(score_from_polarity(-7.5), 0.0);
        assert_eq!(score_from_polarity(f64::NAN), 5.0);
    }

    #[test]
    fn threshold_is_exclusive_for_low() {
        assert_eq!(MoodOutcome::classify(4.99), MoodOutcome::Low);
        assert_eq!(MoodOutcome::classify(5.0), MoodOutcome::Positive);
        assert_eq!(MoodOutcome::classify(0.0), MoodOutcome::Low);
        assert_eq!(MoodOutcome::classify(10.0), MoodOutcome::Positive);
    }

    #[test]
    fn messages_differ_per_outcome() {
        assert!(MoodOutcome::Low.entry_message().contains("feeling low"));
        assert!(MoodOutcome::Positive.entry_message().starts_with("Great mood"));
        assert!(MoodOutcome::Low.weekly_message().contains("self-care"));
        assert!(MoodOutcome::Positive
            .weekly_message()
            .contains("positive this week"));
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean_mood(&[]), None);
    }

    #[test]
    fn mean_is_unrounded() {
        let mean = mean_mood(&[7.0, 8.0, 8.0]).unwrap();
        assert!((mean - 23.0 / 3.0).abs() < 1e-12);
        assert_eq!(round2(mean), 7.67);
        assert_eq!(mean_mood(&[2.5]), Some(2.5));
    }

    #[test]
    fn mean_just_below_threshold_is_low() {
        let mean = mean_mood(&[4.99, 5.0, 5.0]).unwrap();
        assert_eq!(round2(mean), 5.0);
        assert_eq!(MoodOutcome::classify(mean), MoodOutcome::Low);
    }

    proptest! {
        #[test]
        fn score_tracks_polarity(p in -1.0f64..=1.0) {
            let score = score_from_polarity(p);
            prop_assert!((MIN_MOOD..=MAX_MOOD).contains(&score));
            prop_assert!((score - (p + 1.0) * 5.0).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn score_is_monotonic(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score_from_polarity(lo) <= score_from_polarity(hi));
        }

        #[test]
        fn mean_stays_within_bounds(scores in proptest::collection::vec(0.0f64..=10.0, 1..40)) {
            let mean = mean_mood(&scores).unwrap();
            prop_assert!((MIN_MOOD..=MAX_MOOD).contains(&mean));
        }
    }
}
