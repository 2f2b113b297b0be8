//! Sitemap entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expected change cadence of a URL, per the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Changes on every access.
    Always,
    /// Changes hourly.
    Hourly,
    /// Changes daily.
    Daily,
    /// Changes weekly.
    Weekly,
    /// Changes monthly.
    Monthly,
    /// Changes yearly.
    Yearly,
    /// Archived, never changes.
    Never,
}

impl ChangeFrequency {
    /// Lowercase wire form used in `<changefreq>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared URL with freshness/priority hints for crawlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute URL.
    pub url: String,

    /// Last-modification timestamp.
    pub last_modified: DateTime<Utc>,

    /// Expected change cadence.
    pub change_frequency: ChangeFrequency,

    /// Crawl priority in `[0.0, 1.0]`. Not re-validated here; callers own
    /// range checking upstream.
    pub priority: f32,
}
