use axum::{extract::State, http::StatusCode, Json};
use review_pulse_core::lexicon::{NEGATION_LEXICON_VERSION, POLARITY_LEXICON_VERSION};
use review_pulse_core::{preprocess, SentimentError};

use super::AppState;
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Map a pipeline error to a response.
///
/// Blank reviews and reviews with nothing to score are the caller's problem
/// and are reported as-is. Anything else is logged and the client only sees
/// a generic message.
fn analysis_error(e: SentimentError) -> (StatusCode, String) {
    match e {
        SentimentError::EmptyInput => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        SentimentError::NoSentences => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        SentimentError::UnmappablePolarity(_) => {
            tracing::error!("Internal error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        negation_lexicon: NEGATION_LEXICON_VERSION.to_string(),
        polarity_lexicon: POLARITY_LEXICON_VERSION.to_string(),
    })
}

// ============================================================
// Feedback Analysis
// ============================================================

pub async fn analyze_review(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeInput>,
) -> Result<Json<AnalysisResponse>, (StatusCode, String)> {
    let analysis = state.scorer.analyze(&input.text).map_err(analysis_error)?;

    tracing::info!(
        rating = %analysis.rating,
        verdict = analysis.verdict.as_str(),
        "Analyzed review"
    );
    Ok(Json(analysis.into()))
}

/// Show how the negation preprocessor rewrites a review.
pub async fn preprocess_review(Json(input): Json<AnalyzeInput>) -> Json<PreprocessResponse> {
    let preprocessed = preprocess(&input.text);
    Json(PreprocessResponse {
        text: input.text,
        preprocessed,
    })
}

// ============================================================
// Dashboard
// ============================================================

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let tally = state.tally.lock().expect("dashboard lock poisoned");
    Json(tally.summary())
}

/// Analyze a review and count it on the dashboard.
pub async fn record_review(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeInput>,
) -> Result<(StatusCode, Json<DashboardUpdate>), (StatusCode, String)> {
    let analysis = state.scorer.analyze(&input.text).map_err(analysis_error)?;

    let dashboard = {
        let mut tally = state.tally.lock().expect("dashboard lock poisoned");
        tally.record(&analysis)
    };

    tracing::info!(
        verdict = analysis.verdict.as_str(),
        reviews = dashboard.reviews,
        "Recorded review"
    );
    Ok((
        StatusCode::CREATED,
        Json(DashboardUpdate {
            review: analysis.into(),
            dashboard,
        }),
    ))
}

pub async fn reset_dashboard(State(state): State<AppState>) -> StatusCode {
    state.tally.lock().expect("dashboard lock poisoned").reset();
    tracing::info!("Dashboard reset");
    StatusCode::NO_CONTENT
}

// ============================================================
// BI
// ============================================================

pub async fn get_bi_embed(State(state): State<AppState>) -> Json<BiEmbed> {
    Json(state.bi.clone())
}
