//! Rendering to the sitemaps.org XML schema.

use chrono::SecondsFormat;

use crate::entry::SitemapEntry;

/// Namespace of the sitemap protocol 0.9.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render an ordered entry list as a sitemap XML document.
///
/// Emits a `<urlset>` root with one `<url>` child per entry carrying
/// `<loc>`, `<lastmod>`, `<changefreq>` and `<priority>` in that order.
/// An empty entry list yields a valid document with a childless root.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::with_capacity(128 + entries.len() * 160);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<urlset xmlns=\"{SITEMAP_NAMESPACE}\">\n"));

    for entry in entries {
        let lastmod = entry
            .last_modified
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape_text(&entry.url)));
        out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        out.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        out.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}

/// Standard XML text escaping.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
