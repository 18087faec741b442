//! Running counters for the dashboard page.
//!
//! The tally is a plain value owned by whoever needs it (the API keeps one
//! behind a mutex in its state). Nothing here is global.

use chrono::{DateTime, Utc};
use review_pulse_core::{Analysis, ScaleRating, Verdict};

use crate::models::DashboardSummary;

#[derive(Debug, Clone, Default)]
pub struct DashboardTally {
    positive: u64,
    negative: u64,
    neutral: u64,
    total_polarity: f64,
    last_rating: Option<ScaleRating>,
    updated_at: Option<DateTime<Utc>>,
}

impl DashboardTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `analysis` towards its verdict and return the updated summary.
    ///
    /// The last rating is overwritten on every call.
    pub fn record(&mut self, analysis: &Analysis) -> DashboardSummary {
        match analysis.verdict {
            Verdict::Positive => self.positive += 1,
            Verdict::Negative => self.negative += 1,
            Verdict::Neutral => self.neutral += 1,
        }
        self.total_polarity += analysis.polarity;
        self.last_rating = Some(analysis.rating);
        self.updated_at = Some(Utc::now());

        tracing::debug!(
            verdict = analysis.verdict.as_str(),
            reviews = self.reviews(),
            "recorded review on dashboard"
        );
        self.summary()
    }

    pub fn reviews(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    pub fn summary(&self) -> DashboardSummary {
        let reviews = self.reviews();
        let average_polarity = if reviews == 0 {
            0.0
        } else {
            self.total_polarity / reviews as f64
        };

        DashboardSummary {
            positive: self.positive,
            negative: self.negative,
            neutral: self.neutral,
            reviews,
            total_polarity: self.total_polarity,
            average_polarity,
            last_rating: self.last_rating,
            updated_at: self.updated_at,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
