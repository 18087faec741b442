use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::negation::preprocess;
use crate::scale::{map_to_scale, ScaleRating, SentimentLabel};
use crate::scorer::{default_scorer, SentimentScorer};

/// Coarse direction of a review, decided by the sign of its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

impl Verdict {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Headline mark shown next to the verdict.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Positive => "✅",
            Self::Negative => "❌",
            Self::Neutral => "⚪",
        }
    }
}

/// Result of running one review through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub polarity: f64,
    pub rating: ScaleRating,
    pub label: SentimentLabel,
    pub verdict: Verdict,
    /// The review after negation tagging.
    pub preprocessed: String,
}

/// One bar of the rating chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub rating: ScaleRating,
    pub sentiment: f64,
}

impl Analysis {
    /// Five bars, one per rating. Only the bar at this analysis' rating is
    /// non-zero, and it carries the polarity.
    pub fn chart(&self) -> Vec<ChartBar> {
        ScaleRating::ALL
            .iter()
            .map(|&rating| ChartBar {
                rating,
                sentiment: if rating == self.rating {
                    self.polarity
                } else {
                    0.0
                },
            })
            .collect()
    }
}

impl SentimentScorer {
    /// Run the full pipeline: reject blank input, tag negations, score, and
    /// bucket.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        if text.trim().is_empty() {
            return Err(SentimentError::EmptyInput);
        }

        let preprocessed = preprocess(text);
        let polarity = self.score_preprocessed(&preprocessed)?;
        let rating = map_to_scale(polarity)?;

        Ok(Analysis {
            polarity,
            rating,
            label: rating.label(),
            verdict: Verdict::from_polarity(polarity),
            preprocessed,
        })
    }
}

/// Analyze `text` with the default scorer.
pub fn analyze(text: &str) -> Result<Analysis> {
    default_scorer().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected_before_scoring() {
        assert_eq!(analyze(""), Err(SentimentError::EmptyInput));
        assert_eq!(analyze(" \n "), Err(SentimentError::EmptyInput));
    }

    #[test]
    fn verdict_follows_sign() {
        assert_eq!(Verdict::from_polarity(0.2), Verdict::Positive);
        assert_eq!(Verdict::from_polarity(-0.2), Verdict::Negative);
        assert_eq!(Verdict::from_polarity(0.0), Verdict::Neutral);
    }

    #[test]
    fn chart_has_one_bar_per_rating() {
        let analysis = analyze("Terrible. Awful.").unwrap();
        let chart = analysis.chart();

        assert_eq!(chart.len(), 5);
        for (bar, rating) in chart.iter().zip(ScaleRating::ALL) {
            assert_eq!(bar.rating, rating);
        }
        assert_eq!(chart[0].sentiment, -1.0);
        assert!(chart[1..].iter().all(|bar| bar.sentiment == 0.0));
    }

    #[test]
    fn neutral_review_keeps_all_bars_at_zero() {
        let analysis = analyze("It arrived on Monday.").unwrap();
        assert_eq!(analysis.rating, ScaleRating::Three);
        assert!(analysis.chart().iter().all(|bar| bar.sentiment == 0.0));
    }
}
