//! Route catalogs and sitemap-entry construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::{ChangeFrequency, SitemapEntry};

/// Change frequency assigned to every category page.
pub const CATEGORY_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Monthly;

/// Priority assigned to every category page.
pub const CATEGORY_PRIORITY: f32 = 0.6;

/// A fixed site route (home, blog index, contact page, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    /// Path relative to the base URL; empty for the site root.
    pub path: String,

    /// Expected change cadence.
    pub change_frequency: ChangeFrequency,

    /// Crawl priority.
    pub priority: f32,

    /// Last modification; entries without one get the build time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// A content item (blog post) mapped 1:1 into the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier; forms the `/blog/{id}` URL.
    pub id: String,

    /// URL-safe slug.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Last modification timestamp.
    pub last_modified: DateTime<Utc>,

    /// Expected change cadence.
    pub change_frequency: ChangeFrequency,

    /// Crawl priority.
    pub priority: f32,
}

/// A content category; forms the `/categoria/{slug}` URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier.
    pub id: String,

    /// URL-safe slug.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Last modification timestamp.
    pub last_modified: DateTime<Utc>,
}

/// Build the ordered sitemap-entry list from the three catalogs.
///
/// Concatenates static routes, then content items, then categories,
/// preserving each catalog's internal order. Static routes without a
/// last-modified timestamp get the current time. Categories always map to
/// [`CATEGORY_CHANGE_FREQUENCY`] and [`CATEGORY_PRIORITY`].
///
/// The catalogs are trusted verbatim: nothing is sorted, filtered, or
/// deduplicated, and duplicate URLs pass through unchanged.
pub fn build_entries(
    base_url: &str,
    static_routes: &[StaticRoute],
    posts: &[ContentItem],
    categories: &[Category],
) -> Vec<SitemapEntry> {
    let now = Utc::now();
    let mut entries =
        Vec::with_capacity(static_routes.len() + posts.len() + categories.len());

    for route in static_routes {
        entries.push(SitemapEntry {
            url: format!("{base_url}{}", route.path),
            last_modified: route.last_modified.unwrap_or(now),
            change_frequency: route.change_frequency,
            priority: route.priority,
        });
    }

    for post in posts {
        entries.push(SitemapEntry {
            url: format!("{base_url}/blog/{}", post.id),
            last_modified: post.last_modified,
            change_frequency: post.change_frequency,
            priority: post.priority,
        });
    }

    for category in categories {
        entries.push(SitemapEntry {
            url: format!("{base_url}/categoria/{}", category.slug),
            last_modified: category.last_modified,
            change_frequency: CATEGORY_CHANGE_FREQUENCY,
            priority: CATEGORY_PRIORITY,
        });
    }

    debug!(total = entries.len(), "sitemap entries built");
    entries
}
