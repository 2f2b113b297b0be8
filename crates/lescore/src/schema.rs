//! Schema.org structured-data variants.
//!
//! Each supported schema type is a tagged variant carrying its own payload
//! record, resolved through exhaustive matching. On the wire the tag is the
//! JSON-LD `@type` discriminator.

use serde::{Deserialize, Serialize};

/// Schema.org contact point attached to an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    /// Contact telephone number.
    pub telephone: String,
    /// Contact purpose (e.g. "customer service").
    pub contact_type: String,
    /// Languages the contact point serves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_language: Vec<String>,
}

/// Payload for an `Organization` annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Canonical organization URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Customer contact point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
    /// Social profile URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Payload for a `WebSite` annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    /// Site name.
    pub name: String,
    /// Site URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Site-search target template, when the site exposes search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_target: Option<String>,
}

/// One element of a breadcrumb trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// 1-based position in the trail.
    pub position: u32,
    /// Display name.
    pub name: String,
    /// Item URL.
    pub item: String,
}

/// Payload for a `BreadcrumbList` annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    /// Display name for the trail.
    pub name: String,
    /// Ordered trail elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_list_element: Vec<BreadcrumbItem>,
}

/// Payload for an `Article` annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article name or headline.
    pub name: String,
}

/// Payload for a `ContactPage` annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPage {
    /// Page name.
    pub name: String,
}

/// A machine-readable page annotation.
///
/// The scoring engine only counts entries; consumers that emit JSON-LD get
/// the `@type` discriminator from the serde tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum StructuredData {
    /// Publishing organization.
    Organization(Organization),
    /// Site-level annotation.
    WebSite(WebSite),
    /// Breadcrumb trail.
    BreadcrumbList(BreadcrumbList),
    /// Blog article or post.
    Article(Article),
    /// Contact page.
    ContactPage(ContactPage),
}

impl StructuredData {
    /// The Schema.org type name of this annotation.
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::Organization(_) => "Organization",
            Self::WebSite(_) => "WebSite",
            Self::BreadcrumbList(_) => "BreadcrumbList",
            Self::Article(_) => "Article",
            Self::ContactPage(_) => "ContactPage",
        }
    }

    /// The human-facing name carried by the payload.
    pub fn name(&self) -> &str {
        match self {
            Self::Organization(payload) => &payload.name,
            Self::WebSite(payload) => &payload.name,
            Self::BreadcrumbList(payload) => &payload.name,
            Self::Article(payload) => &payload.name,
            Self::ContactPage(payload) => &payload.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_type_tag() {
        let data = StructuredData::Article(Article {
            name: "BlogPosting".to_string(),
        });
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["@type"], "Article");
        assert_eq!(json["name"], "BlogPosting");
    }

    #[test]
    fn test_deserializes_from_type_tag() {
        let data: StructuredData =
            serde_json::from_value(serde_json::json!({ "@type": "WebSite", "name": "Website" }))
                .expect("deserialize");
        assert_eq!(data.schema_type(), "WebSite");
        assert_eq!(data.name(), "Website");
    }

    #[test]
    fn test_organization_camel_case_keys() {
        let data = StructuredData::Organization(Organization {
            name: "Example".to_string(),
            contact_point: Some(ContactPoint {
                telephone: "+1-555-123-4567".to_string(),
                contact_type: "customer service".to_string(),
                available_language: vec!["Spanish".to_string(), "English".to_string()],
            }),
            same_as: vec!["https://example.com".to_string()],
            ..Default::default()
        });
        let json = serde_json::to_value(&data).expect("serialize");
        assert!(json.get("contactPoint").is_some());
        assert!(json.get("sameAs").is_some());
        assert_eq!(json["contactPoint"]["contactType"], "customer service");
    }
}
