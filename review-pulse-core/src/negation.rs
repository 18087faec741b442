//! Negation tagging.
//!
//! A token that matches a negation trigger arms a flag; the next purely
//! alphabetic token is rewritten as `neg_<token>` and disarms it. Anything
//! else (numbers, punctuation, mixed tokens) passes through and leaves the
//! flag as it was, so "not -- good" still tags "good".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::NEGATION_TRIGGERS;

/// Prefix applied to a negated token.
pub const NEGATION_MARKER: &str = "neg_";

static TRIGGER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = NEGATION_TRIGGERS
        .iter()
        .map(|trigger| regex::escape(trigger))
        .collect::<Vec<_>>()
        .join("|");
    // Anchored at the token start: "not," and "Never!" trigger, "notable" does not.
    Regex::new(&format!(r"(?i)^\b(?:{alternation})\b"))
        .expect("negation trigger table must compile to a valid pattern")
});

/// Returns true if `token` starts with a whole-word negation trigger.
pub fn is_negation_trigger(token: &str) -> bool {
    TRIGGER_PATTERN.is_match(token)
}

fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Tag the word following each negation trigger with [`NEGATION_MARKER`].
///
/// Tokens are split on whitespace and rejoined with single spaces, so the
/// token count is preserved but original spacing is not.
pub fn preprocess(text: &str) -> String {
    let mut negated = false;
    let mut marked = 0usize;

    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            if is_negation_trigger(token) {
                negated = true;
                token.to_string()
            } else if negated && is_alphabetic_word(token) {
                negated = false;
                marked += 1;
                format!("{NEGATION_MARKER}{token}")
            } else {
                token.to_string()
            }
        })
        .collect();

    tracing::trace!(tokens = tokens.len(), marked, "preprocessed review text");
    tokens.join(" ")
}
