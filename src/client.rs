//! HTTP client for a running Review Pulse server.
//!
//! Configuration is via environment variables:
//! - `REVIEW_PULSE_URL` - Base URL (default: `http://127.0.0.1:3000/api/v1`)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// Default URL for a local server.
pub const DEFAULT_URL: &str = "http://127.0.0.1:3000/api/v1";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable review: {0}")]
    Unprocessable(String),

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Debug, Clone)]
pub struct PulseClient {
    base_url: String,
    client: Client,
}

impl PulseClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("REVIEW_PULSE_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                StatusCode::UNPROCESSABLE_ENTITY => Err(ClientError::Unprocessable(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }

    /// Score a review on the server without recording it.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResponse, ClientError> {
        let response = self
            .client
            .post(self.url("/analyze"))
            .json(&AnalyzeInput {
                text: text.to_string(),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, ClientError> {
        let response = self.client.get(self.url("/dashboard")).send().await?;
        self.handle_response(response).await
    }
}
