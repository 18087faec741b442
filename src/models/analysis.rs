use chrono::{DateTime, Utc};
use review_pulse_core::{Analysis, ChartBar};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for analyzing or recording a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeInput {
    /// The raw review text.
    pub text: String,
}

/// A scored review as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub analysis: Analysis,
    /// Emoji and description for the rating, e.g. `"😊 Happy"`.
    pub emotion: String,
    /// One-line summary suitable for a result banner.
    pub headline: String,
    /// Bars for the "rating vs sentiment" chart, one per rating.
    pub chart: Vec<ChartBar>,
    pub analyzed_at: DateTime<Utc>,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        let verdict = analysis.verdict;
        let headline = format!(
            "{} The review is predicted to be {} with a sentiment score of {:.1}",
            verdict.icon(),
            capitalize(verdict.as_str()),
            analysis.polarity
        );

        Self {
            id: Uuid::new_v4(),
            emotion: analysis.label.tag(),
            headline,
            chart: analysis.chart(),
            analysis,
            analyzed_at: Utc::now(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Response from the preprocess endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessResponse {
    pub text: String,
    pub preprocessed: String,
}

/// Response from the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Versions of the word tables the server scores with.
    pub negation_lexicon: String,
    pub polarity_lexicon: String,
}
