//! Default word lists for the sentiment lexicon.
//!
//! Tuned for personal journal writing: everyday emotional vocabulary rather
//! than product-review language.

use super::lexicon::SentimentLexicon;

pub(super) fn default_lexicon() -> SentimentLexicon {
    let mut lexicon = SentimentLexicon::new();

    // Highly positive (0.8-1.0)
    for word in [
        "excellent",
        "wonderful",
        "amazing",
        "fantastic",
        "brilliant",
        "outstanding",
        "perfect",
        "superb",
        "magnificent",
        "thrilled",
        "ecstatic",
        "overjoyed",
        "elated",
        "blissful",
        "incredible",
        "awesome",
        "best",
        "love",
        "loved",
        "joyful",
    ] {
        lexicon.add_positive(word, 0.9);
    }

    // Moderately positive (0.5-0.7)
    for word in [
        "good",
        "great",
        "nice",
        "pleasant",
        "lovely",
        "delightful",
        "happy",
        "glad",
        "pleased",
        "excited",
        "exciting",
        "grateful",
        "thankful",
        "proud",
        "cheerful",
        "enjoyed",
        "enjoy",
        "fun",
        "beautiful",
        "smile",
        "smiled",
        "laughed",
        "peaceful",
        "relaxed",
        "calm",
        "confident",
        "energized",
        "inspired",
        "motivated",
        "productive",
        "successful",
        "accomplished",
        "loving",
        "kind",
        "better",
    ] {
        lexicon.add_positive(word, 0.6);
    }

    // Mildly positive (0.2-0.4)
    for word in [
        "okay",
        "ok",
        "fine",
        "decent",
        "alright",
        "content",
        "hopeful",
        "positive",
        "promising",
        "rested",
        "interesting",
        "helpful",
        "overcame",
        "improved",
        "calmer",
    ] {
        lexicon.add_positive(word, 0.3);
    }

    // Highly negative (0.8-1.0)
    for word in [
        "terrible",
        "awful",
        "horrible",
        "dreadful",
        "miserable",
        "devastated",
        "devastating",
        "depressed",
        "hopeless",
        "worst",
        "hate",
        "hated",
        "disastrous",
        "heartbroken",
        "furious",
    ] {
        lexicon.add_negative(word, 0.9);
    }

    // Moderately negative (0.5-0.7)
    for word in [
        "bad",
        "sad",
        "unhappy",
        "angry",
        "upset",
        "anxious",
        "worried",
        "stressed",
        "lonely",
        "hurt",
        "afraid",
        "scared",
        "frustrated",
        "frustrating",
        "disappointed",
        "disappointing",
        "annoyed",
        "annoying",
        "exhausted",
        "overwhelmed",
        "sick",
        "painful",
        "crying",
        "cried",
        "awkward",
        "guilty",
        "ashamed",
        "worse",
    ] {
        lexicon.add_negative(word, 0.6);
    }

    // Mildly negative (0.2-0.4)
    for word in [
        "tired",
        "bored",
        "boring",
        "meh",
        "dull",
        "difficult",
        "hard",
        "confused",
        "uncertain",
        "unsure",
        "nervous",
        "restless",
        "lost",
        "struggling",
        "low",
    ] {
        lexicon.add_negative(word, 0.3);
    }

    // Intensifiers scale the next sentiment word.
    for (word, factor) in [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("super", 1.3),
        ("totally", 1.3),
        ("truly", 1.2),
        ("quite", 1.1),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("absolutely", 1.5),
        ("slightly", 0.5),
        ("somewhat", 0.7),
        ("little", 0.7),
    ] {
        lexicon.add_intensifier(word, factor);
    }

    lexicon
}
