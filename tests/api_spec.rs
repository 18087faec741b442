use axum::http::StatusCode;
use axum_test::TestServer;
use review_pulse::api::create_router;
use review_pulse::config::PulseConfig;
use review_pulse::models::*;
use review_pulse::scoring::lexicon::{NEGATION_LEXICON_VERSION, POLARITY_LEXICON_VERSION};
use review_pulse::scoring::{ScaleRating, SentimentLabel, Verdict};
use serde_json::json;

fn setup() -> TestServer {
    setup_with(PulseConfig::default())
}

fn setup_with(config: PulseConfig) -> TestServer {
    let app = create_router(&config);
    TestServer::new(app).expect("Failed to create test server")
}

async fn record(server: &TestServer, text: &str) -> DashboardUpdate {
    let response = server
        .post("/api/v1/dashboard/reviews")
        .json(&AnalyzeInput {
            text: text.to_string(),
        })
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<DashboardUpdate>()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let health: HealthResponse = response.json();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn reports_lexicon_versions() {
        let server = setup();

        let health: HealthResponse = server.get("/api/v1/health").await.json();

        assert_eq!(health.negation_lexicon, NEGATION_LEXICON_VERSION);
        assert_eq!(health.polarity_lexicon, POLARITY_LEXICON_VERSION);
    }
}

mod analyze {
    use super::*;

    #[tokio::test]
    async fn scores_negated_review_as_negative() {
        let server = setup();

        let response = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "This product is not good" }))
            .await;

        response.assert_status_ok();
        let result: AnalysisResponse = response.json();
        assert!(result.analysis.preprocessed.contains("neg_good"));
        assert!(result.analysis.polarity < 0.0);
        assert!(matches!(
            result.analysis.rating,
            ScaleRating::One | ScaleRating::Two
        ));
        assert!(result.analysis.label.is_negative());
        assert_eq!(result.analysis.verdict, Verdict::Negative);
        assert!(result.headline.contains("Negative"));
    }

    #[tokio::test]
    async fn scores_negated_word_before_punctuation_as_negative() {
        let server = setup();

        let result: AnalysisResponse = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "This product is not good." }))
            .await
            .json();

        assert!(result.analysis.polarity < 0.0);
        assert!(result.analysis.label.is_negative());
    }

    #[tokio::test]
    async fn scores_enthusiastic_review_as_positive() {
        let server = setup();

        let response = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "I love this, it is amazing" }))
            .await;

        response.assert_status_ok();
        let result: AnalysisResponse = response.json();
        assert!(result.analysis.polarity > 0.0);
        assert_eq!(result.analysis.rating, ScaleRating::Five);
        assert_eq!(result.analysis.label, SentimentLabel::VeryPositive);
        assert_eq!(result.emotion, "😍 Very happy");
    }

    #[tokio::test]
    async fn returns_flat_json_with_integer_rating() {
        let server = setup();

        let response = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "terrible" }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["rating"], 1);
        assert_eq!(body["label"], "very_negative");
        assert_eq!(body["verdict"], "negative");
        assert_eq!(body["polarity"], -1.0);
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn chart_highlights_only_the_rated_bar() {
        let server = setup();

        let result: AnalysisResponse = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "Good value" }))
            .await
            .json();

        assert_eq!(result.chart.len(), 5);
        let highlighted: Vec<_> = result
            .chart
            .iter()
            .filter(|bar| bar.sentiment != 0.0)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].rating, result.analysis.rating);
        assert_eq!(highlighted[0].sentiment, result.analysis.polarity);
    }

    #[tokio::test]
    async fn rejects_empty_review() {
        let server = setup();

        let response = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "   " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Please enter a review to analyze.");
    }

    #[tokio::test]
    async fn rejects_body_without_text() {
        let server = setup();

        let response = server
            .post("/api/v1/analyze")
            .json(&json!({ "review": "great" }))
            .await;

        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn honors_configured_negation_weight() {
        let mut config = PulseConfig::default();
        config.scoring.negation_weight = -1.0;
        let server = setup_with(config);

        let result: AnalysisResponse = server
            .post("/api/v1/analyze")
            .json(&json!({ "text": "not good" }))
            .await
            .json();

        assert!((result.analysis.polarity + 0.7).abs() < 1e-9);
        assert_eq!(result.analysis.rating, ScaleRating::One);
    }
}

mod preprocess {
    use super::*;

    #[tokio::test]
    async fn returns_marked_text() {
        let server = setup();

        let response = server
            .post("/api/v1/preprocess")
            .json(&json!({ "text": "never  again, not  worth it" }))
            .await;

        response.assert_status_ok();
        let result: PreprocessResponse = response.json();
        assert_eq!(result.text, "never  again, not  worth it");
        assert_eq!(result.preprocessed, "never again, not neg_worth it");
    }
}

mod dashboard {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let server = setup();

        let response = server.get("/api/v1/dashboard").await;

        response.assert_status_ok();
        let summary: DashboardSummary = response.json();
        assert_eq!(summary.reviews, 0);
        assert_eq!(summary.average_polarity, 0.0);
        assert!(summary.last_rating.is_none());
        assert!(summary.updated_at.is_none());
    }

    #[tokio::test]
    async fn counts_reviews_by_verdict() {
        let server = setup();

        record(&server, "Excellent quality").await;
        record(&server, "I love it").await;
        record(&server, "Terrible packaging").await;
        let last = record(&server, "It came in a box").await;

        assert_eq!(last.dashboard.positive, 2);
        assert_eq!(last.dashboard.negative, 1);
        assert_eq!(last.dashboard.neutral, 1);
        assert_eq!(last.dashboard.reviews, 4);
        assert_eq!(last.dashboard.last_rating, Some(ScaleRating::Three));

        let summary: DashboardSummary = server.get("/api/v1/dashboard").await.json();
        assert_eq!(summary, last.dashboard);
    }

    #[tokio::test]
    async fn tracks_total_and_average_polarity() {
        let server = setup();

        // excellent 1.0, terrible -1.0, great 0.8
        record(&server, "excellent").await;
        record(&server, "terrible").await;
        let update = record(&server, "great").await;

        assert!((update.dashboard.total_polarity - 0.8).abs() < 1e-9);
        assert!((update.dashboard.average_polarity - 0.8 / 3.0).abs() < 1e-9);
        assert_eq!(update.review.analysis.rating, ScaleRating::Five);
    }

    #[tokio::test]
    async fn empty_review_is_not_counted() {
        let server = setup();

        server
            .post("/api/v1/dashboard/reviews")
            .json(&json!({ "text": "" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let summary: DashboardSummary = server.get("/api/v1/dashboard").await.json();
        assert_eq!(summary.reviews, 0);
    }

    #[tokio::test]
    async fn reset_clears_counters() {
        let server = setup();
        record(&server, "great").await;

        server
            .delete("/api/v1/dashboard")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let summary: DashboardSummary = server.get("/api/v1/dashboard").await.json();
        assert_eq!(summary.reviews, 0);
        assert_eq!(summary.total_polarity, 0.0);
        assert!(summary.last_rating.is_none());
    }

    #[tokio::test]
    async fn separate_servers_keep_separate_tallies() {
        let first = setup();
        let second = setup();

        record(&first, "great").await;

        let summary: DashboardSummary = second.get("/api/v1/dashboard").await.json();
        assert_eq!(summary.reviews, 0);
    }
}

mod bi {
    use super::*;

    #[tokio::test]
    async fn returns_default_embed() {
        let server = setup();

        let response = server.get("/api/v1/bi").await;

        response.assert_status_ok();
        let embed: BiEmbed = response.json();
        assert_eq!(embed, BiEmbed::default());
        assert!(embed.url.starts_with("https://app.powerbi.com/reportEmbed"));
    }

    #[tokio::test]
    async fn returns_configured_url() {
        let mut config = PulseConfig::default();
        config.bi.url = "https://bi.example.test/report".to_string();
        let server = setup_with(config);

        let embed: BiEmbed = server.get("/api/v1/bi").await.json();
        assert_eq!(embed.url, "https://bi.example.test/report");
        assert_eq!(embed.width, 1200);
    }
}

mod cors {
    use super::*;

    #[tokio::test]
    async fn allows_any_origin_by_default() {
        let server = setup();

        let response = server
            .get("/api/v1/health")
            .add_header("Origin", "http://anywhere.test")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn restricts_to_configured_origins() {
        let config = PulseConfig {
            cors_origins: Some(vec!["http://dash.test".to_string()]),
            ..PulseConfig::default()
        };
        let server = setup_with(config);

        let allowed = server
            .get("/api/v1/health")
            .add_header("Origin", "http://dash.test")
            .await;
        assert_eq!(
            allowed.header("access-control-allow-origin"),
            "http://dash.test"
        );

        let denied = server
            .get("/api/v1/health")
            .add_header("Origin", "http://elsewhere.test")
            .await;
        assert!(denied
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }
}
