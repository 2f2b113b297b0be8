//! Page metadata model consumed by the scoring engine.

use serde::{Deserialize, Serialize};

use crate::schema::StructuredData;

/// Open Graph metadata block (social-sharing previews).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphTags {
    /// og:title value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// og:description value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// og:image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Twitter Card metadata block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwitterCardTags {
    /// twitter:title value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// twitter:description value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// twitter:image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Structured record of a page's SEO-relevant metadata fields.
///
/// Every field is optional; a missing field is scored as "not present".
/// Constructed fresh per scoring call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Open Graph block.
    #[serde(rename = "openGraph", skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraphTags>,

    /// Twitter Card block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCardTags>,

    /// Canonical URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,

    /// Robots meta directive (e.g. "index, follow").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,

    /// Meta keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Schema.org annotations; only the count affects the score.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structured_data: Vec<StructuredData>,
}

impl OpenGraphTags {
    /// Whether both core fields (title and description) carry a value.
    pub fn has_core(&self) -> bool {
        present(&self.title) && present(&self.description)
    }
}

impl TwitterCardTags {
    /// Whether both core fields (title and description) carry a value.
    pub fn has_core(&self) -> bool {
        present(&self.title) && present(&self.description)
    }
}

/// An optional field counts as present only when non-empty.
pub(crate) fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_rejects_empty_string() {
        assert!(!present(&Some(String::new())));
        assert!(!present(&None));
        assert!(present(&Some("x".to_string())));
    }

    #[test]
    fn test_open_graph_has_core() {
        let og = OpenGraphTags {
            title: Some("t".to_string()),
            description: Some("d".to_string()),
            image: None,
        };
        assert!(og.has_core());

        let missing_description = OpenGraphTags {
            title: Some("t".to_string()),
            ..Default::default()
        };
        assert!(!missing_description.has_core());
    }

    #[test]
    fn test_metadata_serializes_open_graph_camel_case() {
        let metadata = PageMetadata {
            open_graph: Some(OpenGraphTags::default()),
            ..Default::default()
        };
        let json = serde_json::to_value(&metadata).expect("serialize");
        assert!(json.get("openGraph").is_some());
        assert!(json.get("open_graph").is_none());
    }

    #[test]
    fn test_metadata_skips_absent_fields() {
        let json = serde_json::to_value(PageMetadata::default()).expect("serialize");
        assert_eq!(json, serde_json::json!({}));
    }
}
