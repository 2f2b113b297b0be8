//! API request/response types matching the wire contract.

use lescore::{score, PageMetadata};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/seo-check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoCheckRequest {
    /// URL to check.
    pub url: Option<String>,
}

/// Response of `POST /api/seo-check`.
///
/// The metadata fields are flattened next to the score so the body reads
/// `{ url, title?, description?, openGraph?, ..., score, recommendations }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoCheckResponse {
    /// Checked URL.
    pub url: String,

    /// Metadata the page declares.
    #[serde(flatten)]
    pub metadata: PageMetadata,

    /// Integrity score in `[0, 100]`.
    pub score: u32,

    /// Improvement recommendations, in rule order.
    pub recommendations: Vec<String>,
}

impl SeoCheckResponse {
    /// Score the metadata snapshot a URL resolves to.
    pub fn for_url(url: &str) -> Self {
        let metadata = lecontenu::metadata_for_url(url);
        let report = score(&metadata);
        Self {
            url: url.to_string(),
            metadata,
            score: report.score,
            recommendations: report.recommendations,
        }
    }
}
