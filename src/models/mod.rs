//! Request and response types for the Review Pulse API.
//!
//! - [`AnalysisResponse`]: a scored review with its chart series.
//! - [`DashboardSummary`]: running counters across recorded reviews.
//! - [`BiEmbed`]: the fixed BI report descriptor.

mod analysis;
mod dashboard;
mod embed;

pub use analysis::*;
pub use dashboard::*;
pub use embed::*;
