//! Per-URL page-metadata snapshots.
//!
//! The demo stands in for a real scraper: known URLs resolve to the
//! metadata their pages declare. Blog URLs get the blog-post snapshot,
//! the contact page its own, anything else the home snapshot.

use lescore::schema::{Article, BreadcrumbList, ContactPage, Organization, WebSite};
use lescore::{OpenGraphTags, PageMetadata, StructuredData, TwitterCardTags};

fn blog_metadata(url: &str) -> PageMetadata {
    PageMetadata {
        title: Some("Guía Completa de SEO en Next.js 2025 | Mi Sitio Optimizado".to_string()),
        description: Some(
            "Aprende técnicas avanzadas de SEO en Next.js 13+ con App Router. Implementa meta \
             tags dinámicos, sitemaps y optimización completa."
                .to_string(),
        ),
        open_graph: Some(OpenGraphTags {
            title: Some("Guía Completa de SEO en Next.js 2025".to_string()),
            description: Some(
                "Aprende técnicas avanzadas de SEO en Next.js 13+ con App Router.".to_string(),
            ),
            image: Some("/og-blog-image.jpg".to_string()),
        }),
        twitter: Some(TwitterCardTags {
            title: Some("Guía Completa de SEO en Next.js 2025".to_string()),
            description: Some(
                "Aprende técnicas avanzadas de SEO en Next.js 13+ con App Router.".to_string(),
            ),
            image: Some("/twitter-blog-image.jpg".to_string()),
        }),
        canonical: Some(url.to_string()),
        robots: Some("index, follow".to_string()),
        keywords: Some("Next.js, SEO, App Router, meta tags, optimización".to_string()),
        structured_data: vec![
            StructuredData::Article(Article {
                name: "BlogPosting".to_string(),
            }),
            StructuredData::BreadcrumbList(BreadcrumbList {
                name: "Breadcrumbs".to_string(),
                item_list_element: Vec::new(),
            }),
        ],
    }
}

fn contact_metadata(url: &str) -> PageMetadata {
    PageMetadata {
        title: Some("Contacto - Mi Sitio Optimizado".to_string()),
        description: Some(
            "Ponte en contacto con nosotros para consultas sobre SEO y optimización web. \
             Expertos en Next.js y rendimiento web."
                .to_string(),
        ),
        open_graph: Some(OpenGraphTags {
            title: Some("Contacto - Mi Sitio Optimizado".to_string()),
            description: Some(
                "Ponte en contacto con nosotros para consultas sobre SEO y optimización web."
                    .to_string(),
            ),
            image: Some("/og-contact-image.jpg".to_string()),
        }),
        // The contact page ships no twitter:image.
        twitter: Some(TwitterCardTags {
            title: Some("Contacto - Mi Sitio Optimizado".to_string()),
            description: Some(
                "Ponte en contacto con nosotros para consultas sobre SEO y optimización web."
                    .to_string(),
            ),
            image: None,
        }),
        canonical: Some(url.to_string()),
        robots: Some("index, follow".to_string()),
        keywords: Some("contacto, consultoría SEO, Next.js".to_string()),
        structured_data: vec![StructuredData::ContactPage(ContactPage {
            name: "Contact Information".to_string(),
        })],
    }
}

fn home_metadata(url: &str) -> PageMetadata {
    PageMetadata {
        title: Some("Mi Sitio Optimizado - SEO con Next.js".to_string()),
        description: Some(
            "Aprende sobre optimización SEO y rendimiento en Next.js. Descubre técnicas \
             avanzadas para mejorar tu web."
                .to_string(),
        ),
        open_graph: Some(OpenGraphTags {
            title: Some("Mi Sitio Optimizado - SEO con Next.js".to_string()),
            description: Some(
                "Descubre técnicas avanzadas para mejorar tu web con Next.js y optimización SEO."
                    .to_string(),
            ),
            image: Some("/og-home-image.jpg".to_string()),
        }),
        twitter: Some(TwitterCardTags {
            title: Some("Mi Sitio Optimizado - SEO con Next.js".to_string()),
            description: Some(
                "Descubre técnicas avanzadas para mejorar tu web con Next.js y optimización SEO."
                    .to_string(),
            ),
            image: Some("/twitter-home-image.jpg".to_string()),
        }),
        canonical: Some(url.to_string()),
        robots: Some("index, follow".to_string()),
        keywords: Some(
            "Next.js, SEO, optimización web, React, desarrollo web, rendimiento".to_string(),
        ),
        structured_data: vec![
            StructuredData::WebSite(WebSite {
                name: "Website".to_string(),
                ..Default::default()
            }),
            StructuredData::Organization(Organization {
                name: "Organization".to_string(),
                ..Default::default()
            }),
        ],
    }
}

/// Resolve the metadata snapshot a URL would declare.
///
/// Total: unknown URLs fall back to the home snapshot. The canonical field
/// always echoes the requested URL.
pub fn metadata_for_url(url: &str) -> PageMetadata {
    if url.contains("/blog/") {
        blog_metadata(url)
    } else if url.contains("/contacto") {
        contact_metadata(url)
    } else {
        home_metadata(url)
    }
}
