//! The demo site's route catalogs and robots policy.

use chrono::{DateTime, TimeZone, Utc};
use lecarte::{Category, ChangeFrequency, ContentItem, RobotsPolicy, RobotsRule, StaticRoute};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    // All catalog dates are fixed, valid calendar dates.
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// The fixed top-level routes of the demo site.
pub fn demo_static_routes() -> Vec<StaticRoute> {
    let route = |path: &str, change_frequency, priority| StaticRoute {
        path: path.to_string(),
        change_frequency,
        priority,
        last_modified: None,
    };

    vec![
        route("", ChangeFrequency::Weekly, 1.0),
        route("/sobre-nosotros", ChangeFrequency::Monthly, 0.8),
        route("/blog", ChangeFrequency::Daily, 0.9),
        route("/contacto", ChangeFrequency::Monthly, 0.7),
        route("/herramientas-seo", ChangeFrequency::Monthly, 0.8),
    ]
}

/// The five demo blog posts.
pub fn demo_blog_posts() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "1".to_string(),
            slug: "guia-completa-seo-nextjs-2025".to_string(),
            title: "Guía Completa de SEO en Next.js 2025".to_string(),
            last_modified: utc(2025, 1, 15, 10, 0),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.9,
        },
        ContentItem {
            id: "2".to_string(),
            slug: "core-web-vitals-optimizacion-practica".to_string(),
            title: "Core Web Vitals: Optimización Práctica".to_string(),
            last_modified: utc(2025, 1, 10, 15, 30),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.8,
        },
        ContentItem {
            id: "3".to_string(),
            slug: "meta-tags-dinamicos-app-router".to_string(),
            title: "Meta Tags Dinámicos en App Router".to_string(),
            last_modified: utc(2025, 1, 5, 9, 15),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.8,
        },
        ContentItem {
            id: "4".to_string(),
            slug: "lazy-loading-componentes-nextjs".to_string(),
            title: "Lazy Loading de Componentes en Next.js".to_string(),
            last_modified: utc(2024, 12, 20, 14, 20),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        },
        ContentItem {
            id: "5".to_string(),
            slug: "optimizacion-imagenes-nextjs-2025".to_string(),
            title: "Optimización de Imágenes en Next.js 2025".to_string(),
            last_modified: utc(2024, 12, 15, 11, 45),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.8,
        },
    ]
}

/// The three demo content categories.
pub fn demo_categories() -> Vec<Category> {
    let category = |id: &str, slug: &str, name: &str| Category {
        id: id.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        last_modified: utc(2025, 1, 1, 0, 0),
    };

    vec![
        category("1", "seo", "SEO"),
        category("2", "rendimiento", "Rendimiento"),
        category("3", "nextjs", "Next.js"),
    ]
}

/// Default robots policy for the demo site.
///
/// Three rule groups: a wildcard baseline and slowed-down rules for the two
/// major crawlers, plus the sitemap reference and preferred host.
pub fn default_robots_policy(base_url: &str) -> RobotsPolicy {
    RobotsPolicy {
        rules: vec![
            RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: vec![
                    "/private/".to_string(),
                    "/admin/".to_string(),
                    "/api/".to_string(),
                    "/404".to_string(),
                    "/*.json$".to_string(),
                ],
                crawl_delay: None,
            },
            RobotsRule {
                user_agent: "Googlebot".to_string(),
                allow: vec!["/".to_string()],
                disallow: vec!["/admin/".to_string(), "/private/".to_string()],
                crawl_delay: Some(2),
            },
            RobotsRule {
                user_agent: "Bingbot".to_string(),
                allow: vec!["/".to_string()],
                disallow: vec!["/admin/".to_string(), "/private/".to_string()],
                crawl_delay: Some(3),
            },
        ],
        sitemap: Some(format!("{base_url}/sitemap.xml")),
        host: Some(base_url.to_string()),
    }
}
