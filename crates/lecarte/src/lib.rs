#![warn(missing_docs)]

//! lecarte - Sitemap builder and robots.txt model.
//!
//! *La Carte* (The Map) - turns caller-supplied route catalogs into an
//! ordered sitemap-entry list and renders it to sitemaps.org XML. Also
//! models per-user-agent robots.txt policies. Both operations are pure;
//! catalogs are explicit parameters and are trusted verbatim (no sorting,
//! filtering, deduplication, or re-validation).

/// Route catalogs and entry-list construction.
pub mod catalog;
/// Sitemap entry model and change-frequency enum.
pub mod entry;
/// Robots.txt policy model and renderer.
pub mod robots;
/// XML rendering for the sitemaps.org schema.
pub mod xml;

pub use catalog::{build_entries, Category, ContentItem, StaticRoute};
pub use entry::{ChangeFrequency, SitemapEntry};
pub use robots::{RobotsPolicy, RobotsRule};
pub use xml::render_xml;
