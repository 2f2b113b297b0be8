//! Fixed site statistics aggregate.
//!
//! A static snapshot in the shape a real deployment would compute from its
//! content store. Wire keys are camelCase to match the established contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Technical SEO capability flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeo {
    /// robots.txt is served.
    pub has_robots_txt: bool,
    /// A sitemap is served.
    pub has_sitemap: bool,
    /// Pages carry structured data.
    pub has_structured_data: bool,
    /// Layout adapts to mobile viewports.
    pub mobile_friendly: bool,
    /// Served over HTTPS.
    pub https_enabled: bool,
}

/// Score snapshot for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageScores {
    /// SEO integrity score.
    pub seo_score: u32,
    /// Estimated performance score.
    pub performance_estimate: u32,
    /// Accessibility score.
    pub accessibility_score: u32,
}

/// Site-wide statistics aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    /// Published page count.
    pub total_pages: u32,
    /// Published blog-post count.
    pub total_blog_posts: u32,
    /// Snapshot timestamp.
    pub last_updated: DateTime<Utc>,
    /// URLs declared in the sitemap.
    pub sitemap_urls: u32,
    /// Average words per page.
    pub avg_words_per_page: u32,
    /// Occurrence count per tracked keyword.
    pub keyword_distribution: BTreeMap<String, u32>,
    /// Technical SEO flags.
    pub technical_seo: TechnicalSeo,
    /// Per-page score snapshot, keyed by path.
    pub page_scores: BTreeMap<String, PageScores>,
}

/// The demo site's statistics snapshot, stamped with the current time.
pub fn site_stats() -> SiteStats {
    let keyword_distribution = [
        ("Next.js", 45),
        ("SEO", 38),
        ("optimización", 32),
        ("rendimiento", 28),
        ("meta tags", 22),
        ("sitemap", 18),
        ("React", 15),
        ("web vitals", 12),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let scores = |seo_score, performance_estimate, accessibility_score| PageScores {
        seo_score,
        performance_estimate,
        accessibility_score,
    };
    let page_scores = [
        ("/", scores(95, 88, 92)),
        ("/blog", scores(93, 85, 90)),
        ("/blog/1", scores(91, 86, 89)),
        ("/contacto", scores(89, 90, 94)),
        ("/sobre-nosotros", scores(87, 89, 91)),
        ("/herramientas-seo", scores(92, 84, 88)),
        ("/ejemplo-rich-snippets", scores(96, 87, 93)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    SiteStats {
        total_pages: 7,
        total_blog_posts: 5,
        last_updated: Utc::now(),
        sitemap_urls: 12,
        avg_words_per_page: 850,
        keyword_distribution,
        technical_seo: TechnicalSeo {
            has_robots_txt: true,
            has_sitemap: true,
            has_structured_data: true,
            mobile_friendly: true,
            https_enabled: true,
        },
        page_scores,
    }
}
