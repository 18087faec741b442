//! Static word tables that drive scoring.
//!
//! Both tables are versioned: any edit that changes which words are present,
//! or their weights, changes scores for existing reviews and must bump the
//! matching version constant.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Version of [`NEGATION_TRIGGERS`].
pub const NEGATION_LEXICON_VERSION: &str = "1.0.0";

/// Version of [`POLARITY_ENTRIES`].
pub const POLARITY_LEXICON_VERSION: &str = "1.0.0";

/// Tokens that negate the next alphabetic word.
///
/// The list mixes true negators ("not", "never") with negative-affect words
/// ("unhappy", "bullshit") that customers use the same way. Multi-word
/// entries are matched against single whitespace tokens and so never fire;
/// they are kept so the table stays comparable across versions.
pub const NEGATION_TRIGGERS: &[&str] = &[
    "not",
    "no",
    "never",
    "none",
    "nothing",
    "neither",
    "nobody",
    "disappointing",
    "lack",
    "without",
    "hardly",
    "barely",
    "seldom",
    "few",
    "nevermore",
    "nowhere",
    "no one",
    "nothingness",
    "neglect",
    "absent",
    "refuse",
    "against",
    "dislike",
    "unpleasant",
    "unhappy",
    "unsatisfactory",
    "dissatisfied",
    "unfavorable",
    "inadequate",
    "imperfect",
    "problematic",
    "not at all",
    "not really",
    "not quite",
    "not much",
    "no longer",
    "not any",
    "not a single",
    "unacceptable",
    "unwanted",
    "not good",
    "not enough",
    "not pleasant",
    "untrustworthy",
    "not true",
    "not right",
    "bastard",
    "bullshit",
];

/// Word polarities in [-1, 1].
pub const POLARITY_ENTRIES: &[(&str, f64)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("fine", 0.4),
    ("love", 0.5),
    ("loved", 0.7),
    ("loves", 0.5),
    ("lovely", 0.5),
    ("like", 0.2),
    ("liked", 0.4),
    ("happy", 0.8),
    ("glad", 0.5),
    ("pleased", 0.6),
    ("pleasant", 0.7),
    ("satisfied", 0.5),
    ("satisfying", 0.5),
    ("beautiful", 0.85),
    ("brilliant", 0.9),
    ("superb", 1.0),
    ("outstanding", 0.5),
    ("impressive", 1.0),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("worth", 0.3),
    ("useful", 0.3),
    ("helpful", 0.5),
    ("easy", 0.4),
    ("fast", 0.2),
    ("quick", 0.3),
    ("comfortable", 0.4),
    ("reliable", 0.5),
    ("sturdy", 0.4),
    ("durable", 0.4),
    ("affordable", 0.4),
    ("fresh", 0.3),
    ("delicious", 1.0),
    ("favorite", 0.5),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("true", 0.35),
    ("right", 0.3),
    ("enough", 0.1),
    ("cool", 0.35),
    ("fun", 0.3),
    ("smooth", 0.4),
    ("friendly", 0.4),
    ("quality", 0.2),
    ("enjoy", 0.4),
    ("enjoyed", 0.5),
    // Negative
    ("bad", -0.7),
    ("poor", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("disgusting", -1.0),
    ("pathetic", -1.0),
    ("useless", -0.5),
    ("broken", -0.4),
    ("defective", -0.6),
    ("faulty", -0.5),
    ("damaged", -0.5),
    ("slow", -0.3),
    ("late", -0.3),
    ("expensive", -0.5),
    ("overpriced", -0.6),
    ("flimsy", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("hates", -0.8),
    ("sad", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.5),
    ("frustrating", -0.6),
    ("frustrated", -0.7),
    ("boring", -1.0),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("wrong", -0.5),
    ("fake", -0.5),
    ("waste", -0.2),
    ("wasted", -0.2),
    ("refund", -0.2),
    ("return", -0.1),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("lack", -0.3),
    ("neglect", -0.4),
    ("refuse", -0.3),
    ("dislike", -0.5),
    ("unpleasant", -0.5),
    ("unhappy", -0.6),
    ("unsatisfactory", -0.5),
    ("dissatisfied", -0.5),
    ("unfavorable", -0.4),
    ("inadequate", -0.5),
    ("imperfect", -0.4),
    ("problematic", -0.5),
    ("unacceptable", -0.6),
    ("unwanted", -0.4),
    ("untrustworthy", -0.6),
    ("bastard", -0.8),
    ("bullshit", -0.8),
    ("scam", -0.8),
    // Emoji
    ("😍", 0.9),
    ("😊", 0.6),
    ("😄", 0.6),
    ("😁", 0.6),
    ("👍", 0.5),
    ("❤️", 0.6),
    ("❤", 0.6),
    ("🎉", 0.5),
    ("😐", 0.0),
    ("😞", -0.5),
    ("😔", -0.5),
    ("😢", -0.6),
    ("😭", -0.8),
    ("😡", -0.8),
    ("👎", -0.5),
    ("💔", -0.6),
];

static STANDARD: Lazy<PolarityLexicon> =
    Lazy::new(|| PolarityLexicon::from_entries(POLARITY_ENTRIES.iter().copied()));

/// Lookup table from lower-cased word to polarity.
#[derive(Debug, Clone, Default)]
pub struct PolarityLexicon {
    entries: HashMap<String, f64>,
}

impl PolarityLexicon {
    /// The built-in lexicon, built once per process.
    pub fn standard() -> &'static PolarityLexicon {
        &STANDARD
    }

    /// Build a lexicon from `(word, polarity)` pairs. Words are lower-cased
    /// and polarities clamped to [-1, 1]; later duplicates win.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, polarity)| (word.to_lowercase(), polarity.clamp(-1.0, 1.0)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
