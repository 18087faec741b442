//! Sentence-averaged lexicon polarity.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::lexicon::PolarityLexicon;
use crate::negation::{is_negation_trigger, preprocess, NEGATION_MARKER};

/// Weight applied to a negated word's polarity. Negation flips the sign and
/// damps the magnitude: "not good" is mildly negative, not as bad as "bad".
pub const DEFAULT_NEGATION_WEIGHT: f64 = -0.5;

static DEFAULT_SCORER: Lazy<SentimentScorer> = Lazy::new(SentimentScorer::default);

/// Tunables for [`SentimentScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorerOptions {
    /// Multiplier for words tagged by the negation preprocessor.
    #[serde(default = "default_negation_weight")]
    pub negation_weight: f64,
}

fn default_negation_weight() -> f64 {
    DEFAULT_NEGATION_WEIGHT
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            negation_weight: DEFAULT_NEGATION_WEIGHT,
        }
    }
}

/// Scores review text against a polarity lexicon.
///
/// Holds no mutable state, so one scorer can be shared across threads.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: PolarityLexicon,
    options: ScorerOptions,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(PolarityLexicon::standard().clone(), ScorerOptions::default())
    }
}

impl SentimentScorer {
    pub fn new(lexicon: PolarityLexicon, options: ScorerOptions) -> Self {
        Self { lexicon, options }
    }

    /// A scorer over the standard lexicon with custom options.
    pub fn with_options(options: ScorerOptions) -> Self {
        Self::new(PolarityLexicon::standard().clone(), options)
    }

    /// Preprocess `text` and return the mean polarity of its sentences.
    ///
    /// Fails with [`SentimentError::NoSentences`] when there is nothing to
    /// average over.
    pub fn score(&self, text: &str) -> Result<f64> {
        self.score_preprocessed(&preprocess(text))
    }

    /// Score text that has already been through [`preprocess`].
    pub fn score_preprocessed(&self, preprocessed: &str) -> Result<f64> {
        let sentences = split_sentences(preprocessed);
        if sentences.is_empty() {
            return Err(SentimentError::NoSentences);
        }

        let total: f64 = sentences
            .iter()
            .map(|sentence| self.sentence_polarity(sentence))
            .sum();
        let polarity = total / sentences.len() as f64;

        tracing::debug!(sentences = sentences.len(), polarity, "scored review");
        Ok(polarity)
    }

    /// Mean polarity of the sentiment-bearing words in one sentence, or 0.0
    /// if it has none.
    ///
    /// A word directly after a negation trigger is negated even when the
    /// preprocessor left it unmarked because of attached punctuation
    /// ("not good.").
    pub fn sentence_polarity(&self, sentence: &str) -> f64 {
        let mut after_trigger = false;
        let mut sum = 0.0;
        let mut count = 0usize;

        for token in sentence.split_whitespace() {
            let trigger = is_negation_trigger(token);
            let negated = after_trigger && !trigger;
            if let Some(p) = self.word_polarity(token, negated) {
                sum += p;
                count += 1;
            }
            after_trigger = trigger;
        }

        if count == 0 {
            0.0
        } else {
            (sum / count as f64).clamp(-1.0, 1.0)
        }
    }

    fn word_polarity(&self, token: &str, negated: bool) -> Option<f64> {
        let lowered = token.to_lowercase();
        if let Some(marked) = lowered.strip_prefix(NEGATION_MARKER) {
            return self
                .lookup(marked)
                .map(|p| p * self.options.negation_weight);
        }

        let p = self.lookup(&lowered)?;
        Some(if negated {
            p * self.options.negation_weight
        } else {
            p
        })
    }

    /// Look up a lowercased token as written, then with ASCII punctuation
    /// trimmed ("😍!"), then trimmed down to its alphanumeric core.
    fn lookup(&self, word: &str) -> Option<f64> {
        self.lexicon
            .get(word)
            .or_else(|| {
                self.lexicon
                    .get(word.trim_matches(|c: char| c.is_ascii_punctuation()))
            })
            .or_else(|| {
                self.lexicon
                    .get(word.trim_matches(|c: char| !c.is_alphanumeric()))
            })
    }
}

/// The shared scorer over the standard lexicon with default options.
pub fn default_scorer() -> &'static SentimentScorer {
    &DEFAULT_SCORER
}

/// Score `text` with the standard lexicon and default options.
pub fn score(text: &str) -> Result<f64> {
    DEFAULT_SCORER.score(text)
}

/// Split text into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` followed by whitespace or the
/// end of the text, so "3.5 stars" and "v1.2" stay whole. Segments with no
/// visible characters are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let is_terminator = |c: char| matches!(c, '.' | '!' | '?');

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if at_boundary {
            sentences.push(&text[start..end]);
            start = end;
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
