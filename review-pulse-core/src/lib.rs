//! Sentiment scoring for customer reviews.
//!
//! # Pipeline
//!
//! 1. [`preprocess`] tags the word after each negation trigger with `neg_`.
//! 2. [`SentimentScorer`] splits the tagged text into sentences, averages
//!    lexicon polarities per sentence, and averages the sentences.
//! 3. [`map_to_scale`] buckets the polarity into a [`ScaleRating`], which
//!    carries a [`SentimentLabel`].
//!
//! [`analyze`] runs all three and returns an [`Analysis`]. Everything here
//! is pure: the lexicons are immutable statics and scorers hold no mutable
//! state.

mod analysis;
pub mod error;
pub mod lexicon;
mod negation;
mod scale;
mod scorer;

pub use analysis::*;
pub use error::SentimentError;
pub use lexicon::PolarityLexicon;
pub use negation::*;
pub use scale::*;
pub use scorer::*;
