#![warn(missing_docs)]

//! lecontenu - Demo content catalogs.
//!
//! *Le Contenu* (The Content) - the demo site's fixed catalogs: static
//! routes, blog posts, categories, per-URL metadata snapshots, the site
//! statistics aggregate, and the default robots policy. In a production
//! deployment these would come from a database or CMS; here they are the
//! known data set the scoring and sitemap engines are exercised against.

/// Static-route, post and category catalogs plus the robots policy.
pub mod catalog;
/// Per-URL page-metadata snapshots.
pub mod pages;
/// Fixed site statistics aggregate.
pub mod stats;

pub use catalog::{default_robots_policy, demo_blog_posts, demo_categories, demo_static_routes};
pub use pages::metadata_for_url;
pub use stats::{site_stats, PageScores, SiteStats, TechnicalSeo};
