//! Robots.txt policy model and renderer.

use serde::{Deserialize, Serialize};

/// Crawl rules for one user agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotsRule {
    /// User-agent pattern (e.g. `*`, `Googlebot`).
    pub user_agent: String,

    /// Allowed path prefixes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,

    /// Disallowed path prefixes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disallow: Vec<String>,

    /// Seconds between requests, when the crawler honors it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<u32>,
}

/// A complete robots.txt declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotsPolicy {
    /// Per-user-agent rule groups, emitted in order.
    pub rules: Vec<RobotsRule>,

    /// Absolute sitemap URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<String>,

    /// Preferred host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl RobotsPolicy {
    /// Render the conventional plain-text robots.txt form.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for rule in &self.rules {
            out.push_str(&format!("User-agent: {}\n", rule.user_agent));
            for path in &rule.allow {
                out.push_str(&format!("Allow: {path}\n"));
            }
            for path in &rule.disallow {
                out.push_str(&format!("Disallow: {path}\n"));
            }
            if let Some(delay) = rule.crawl_delay {
                out.push_str(&format!("Crawl-delay: {delay}\n"));
            }
            out.push('\n');
        }

        if let Some(sitemap) = &self.sitemap {
            out.push_str(&format!("Sitemap: {sitemap}\n"));
        }
        if let Some(host) = &self.host {
            out.push_str(&format!("Host: {host}\n"));
        }

        out
    }
}
