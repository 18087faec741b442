//! Service configuration.
//!
//! Loaded from `<config dir>/review-pulse/config.json` when present, then
//! overridden by environment variables:
//!
//! - `REVIEW_PULSE_HOST` / `REVIEW_PULSE_PORT` - listen address
//! - `REVIEW_PULSE_CORS_ORIGINS` - allowed origins, comma-separated
//! - `REVIEW_PULSE_BI_URL` - BI report embed URL
//! - `REVIEW_PULSE_NEGATION_WEIGHT` - multiplier for negated words

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use review_pulse_core::ScorerOptions;
use serde::{Deserialize, Serialize};

use crate::models::BiEmbed;

const APP_NAME: &str = "review-pulse";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Address the HTTP API binds to.
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    pub scoring: ScorerOptions,
    pub bi: BiEmbed,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: None,
            scoring: ScorerOptions::default(),
            bi: BiEmbed::default(),
        }
    }
}

impl PulseConfig {
    /// Load from the user's config directory and the environment.
    /// Falls back to defaults if the file is missing or fails to parse.
    pub fn load() -> Self {
        let config = match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Self =
            serde_json::from_str(&content).context("Failed to parse config file")?;

        if !config.scoring.negation_weight.is_finite() {
            tracing::warn!(
                "Ignoring non-finite scoring.negation_weight: {}",
                config.scoring.negation_weight
            );
            config.scoring = ScorerOptions::default();
        }

        Ok(config)
    }

    /// Apply overrides looked up through `var`. Unparseable values are
    /// ignored with a warning.
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = var("REVIEW_PULSE_HOST") {
            self.host = host;
        }

        if let Some(port) = var("REVIEW_PULSE_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid REVIEW_PULSE_PORT: {}", port),
            }
        }

        if let Some(origins) = var("REVIEW_PULSE_CORS_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            self.cors_origins = (!origins.is_empty()).then_some(origins);
        }

        if let Some(url) = var("REVIEW_PULSE_BI_URL") {
            self.bi.url = url;
        }

        if let Some(weight) = var("REVIEW_PULSE_NEGATION_WEIGHT") {
            match weight.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => self.scoring.negation_weight = parsed,
                _ => {
                    tracing::warn!("Ignoring invalid REVIEW_PULSE_NEGATION_WEIGHT: {}", weight)
                }
            }
        }

        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
