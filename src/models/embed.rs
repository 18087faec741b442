use serde::{Deserialize, Serialize};

/// Default report embedded on the BI page.
pub const DEFAULT_BI_URL: &str = "https://app.powerbi.com/reportEmbed?reportId=8a7e812d-dace-410b-87bc-9eff0e06cf83&autoAuth=true&ctid=7f28ae11-cd2a-4b23-9922-bfbaab2422fd";

/// Descriptor for the external BI report a front end renders in an iframe.
///
/// The service never talks to the BI provider; it only hands out this fixed
/// descriptor from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiEmbed {
    pub title: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for BiEmbed {
    fn default() -> Self {
        Self {
            title: "Feedback Dash".to_string(),
            url: DEFAULT_BI_URL.to_string(),
            width: 1200,
            height: 800,
        }
    }
}
