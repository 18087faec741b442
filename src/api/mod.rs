mod handlers;

use std::sync::{Arc, Mutex};

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use review_pulse_core::SentimentScorer;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::PulseConfig;
use crate::dashboard::DashboardTally;
use crate::models::BiEmbed;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<SentimentScorer>,
    pub tally: Arc<Mutex<DashboardTally>>,
    pub bi: BiEmbed,
}

impl AppState {
    pub fn new(config: &PulseConfig) -> Self {
        Self {
            scorer: Arc::new(SentimentScorer::with_options(config.scoring)),
            tally: Arc::new(Mutex::new(DashboardTally::new())),
            bi: config.bi.clone(),
        }
    }
}

pub fn create_router(config: &PulseConfig) -> Router {
    let api = Router::new()
        // Feedback analysis
        .route("/analyze", post(handlers::analyze_review))
        .route("/preprocess", post(handlers::preprocess_review))
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard", delete(handlers::reset_dashboard))
        .route("/dashboard/reviews", post(handlers::record_review))
        // BI
        .route("/bi", get(handlers::get_bi_embed))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origins.as_deref()))
        .with_state(AppState::new(config))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
