use chrono::{DateTime, Utc};
use review_pulse_core::ScaleRating;
use serde::{Deserialize, Serialize};

use super::AnalysisResponse;

/// Snapshot of the dashboard counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    /// Total reviews recorded since the last reset.
    pub reviews: u64,
    /// Sum of every recorded polarity.
    pub total_polarity: f64,
    /// `total_polarity / reviews`, or 0 when nothing has been recorded.
    pub average_polarity: f64,
    /// Rating of the most recently recorded review.
    pub last_rating: Option<ScaleRating>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of recording a review: the review itself plus the updated counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub review: AnalysisResponse,
    pub dashboard: DashboardSummary,
}
