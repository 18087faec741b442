use thiserror::Error;

/// Errors raised by the scoring pipeline.
///
/// All variants are local and recoverable; callers are expected to report
/// them back to whoever submitted the review.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SentimentError {
    /// The review was empty or contained only whitespace.
    #[error("Please enter a review to analyze.")]
    EmptyInput,

    /// Preprocessing produced no sentences, so there is nothing to average.
    #[error("Review contains no sentences to score")]
    NoSentences,

    /// A polarity outside [-1, 1] (or NaN) reached the scale mapper.
    #[error("Polarity {0} is outside the range [-1, 1]")]
    UnmappablePolarity(f64),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
