//! Fixed-weight scoring rules.
//!
//! Eight rules are evaluated independently in a fixed order, their point
//! contributions summed and clamped to [`MAX_SCORE`]. A rule that flags an
//! issue contributes exactly one recommendation, in rule order; structured
//! data only flags an empty list. The weights and length windows are
//! inherited business rules and are kept exactly as given.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metadata::{present, PageMetadata};

/// Maximum achievable score.
pub const MAX_SCORE: u32 = 100;

/// Points for a title inside the length window.
pub const TITLE_POINTS: u32 = 20;
/// Points for a title outside the length window.
pub const TITLE_PARTIAL_POINTS: u32 = 10;
/// Inclusive title length window, in characters.
pub const TITLE_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 30..=60;

/// Points for a description inside the length window.
pub const DESCRIPTION_POINTS: u32 = 20;
/// Points for a description outside the length window.
pub const DESCRIPTION_PARTIAL_POINTS: u32 = 10;
/// Inclusive description length window, in characters.
pub const DESCRIPTION_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 120..=160;

/// Points for Open Graph title + description.
pub const OPEN_GRAPH_POINTS: u32 = 15;
/// Bonus points for an Open Graph image.
pub const OPEN_GRAPH_IMAGE_POINTS: u32 = 5;

/// Points for Twitter Card title + description.
pub const TWITTER_POINTS: u32 = 10;
/// Bonus points for a Twitter Card image.
pub const TWITTER_IMAGE_POINTS: u32 = 5;

/// Points for a canonical URL.
pub const CANONICAL_POINTS: u32 = 10;
/// Points for a robots directive.
pub const ROBOTS_POINTS: u32 = 5;
/// Points for meta keywords.
pub const KEYWORDS_POINTS: u32 = 10;

/// Points per structured-data entry.
pub const STRUCTURED_DATA_POINTS_PER_ENTRY: u32 = 5;
/// Cap on the structured-data contribution.
pub const STRUCTURED_DATA_MAX_POINTS: u32 = 10;

/// Result of scoring one metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Integrity score in `[0, 100]`.
    pub score: u32,

    /// One entry per rule that flagged an issue, in rule order.
    pub recommendations: Vec<String>,
}

/// Contribution of a single rule.
struct RuleCredit {
    points: u32,
    recommendation: Option<String>,
}

impl RuleCredit {
    fn full(points: u32) -> Self {
        Self {
            points,
            recommendation: None,
        }
    }

    fn partial(points: u32, recommendation: String) -> Self {
        Self {
            points,
            recommendation: Some(recommendation),
        }
    }

    fn missing(recommendation: &str) -> Self {
        Self {
            points: 0,
            recommendation: Some(recommendation.to_string()),
        }
    }
}

fn title_rule(metadata: &PageMetadata) -> RuleCredit {
    match metadata.title.as_deref().filter(|t| !t.is_empty()) {
        Some(title) => {
            let length = title.chars().count();
            if TITLE_LENGTH_RANGE.contains(&length) {
                RuleCredit::full(TITLE_POINTS)
            } else {
                RuleCredit::partial(
                    TITLE_PARTIAL_POINTS,
                    format!("Title should be 30-60 characters (actual: {length})"),
                )
            }
        }
        None => RuleCredit::missing("Page title is missing"),
    }
}

fn description_rule(metadata: &PageMetadata) -> RuleCredit {
    match metadata.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => {
            let length = description.chars().count();
            if DESCRIPTION_LENGTH_RANGE.contains(&length) {
                RuleCredit::full(DESCRIPTION_POINTS)
            } else {
                RuleCredit::partial(
                    DESCRIPTION_PARTIAL_POINTS,
                    format!("Description should be 120-160 characters (actual: {length})"),
                )
            }
        }
        None => RuleCredit::missing("Meta description is missing"),
    }
}

fn open_graph_rule(metadata: &PageMetadata) -> RuleCredit {
    match metadata.open_graph.as_ref().filter(|og| og.has_core()) {
        Some(og) if present(&og.image) => {
            RuleCredit::full(OPEN_GRAPH_POINTS + OPEN_GRAPH_IMAGE_POINTS)
        }
        Some(_) => RuleCredit::partial(
            OPEN_GRAPH_POINTS,
            "Open Graph image is missing".to_string(),
        ),
        None => RuleCredit::missing("Open Graph tags are incomplete"),
    }
}

fn twitter_rule(metadata: &PageMetadata) -> RuleCredit {
    match metadata.twitter.as_ref().filter(|tw| tw.has_core()) {
        Some(tw) if present(&tw.image) => RuleCredit::full(TWITTER_POINTS + TWITTER_IMAGE_POINTS),
        Some(_) => RuleCredit::partial(
            TWITTER_POINTS,
            "Twitter Card image is missing".to_string(),
        ),
        None => RuleCredit::missing("Twitter Card tags are missing"),
    }
}

fn canonical_rule(metadata: &PageMetadata) -> RuleCredit {
    if present(&metadata.canonical) {
        RuleCredit::full(CANONICAL_POINTS)
    } else {
        RuleCredit::missing("Canonical URL is missing")
    }
}

fn robots_rule(metadata: &PageMetadata) -> RuleCredit {
    if present(&metadata.robots) {
        RuleCredit::full(ROBOTS_POINTS)
    } else {
        RuleCredit::missing("Robots meta directive is missing")
    }
}

fn keywords_rule(metadata: &PageMetadata) -> RuleCredit {
    if present(&metadata.keywords) {
        RuleCredit::full(KEYWORDS_POINTS)
    } else {
        RuleCredit::missing("Consider adding relevant keywords")
    }
}

fn structured_data_rule(metadata: &PageMetadata) -> RuleCredit {
    let count = metadata.structured_data.len() as u32;
    if count > 0 {
        // Any non-empty list earns points; the recommendation fires only
        // when no entries are present at all.
        RuleCredit::full(STRUCTURED_DATA_MAX_POINTS.min(count * STRUCTURED_DATA_POINTS_PER_ENTRY))
    } else {
        RuleCredit::missing("Consider adding structured data (Schema.org)")
    }
}

/// Score a metadata record against the fixed rule table.
///
/// Pure and total: absent fields score as "not present" and never error.
/// The returned recommendations hold exactly one entry per rule that
/// flagged an issue, in evaluation order (title, description, Open Graph,
/// Twitter, canonical, robots, keywords, structured data).
pub fn score(metadata: &PageMetadata) -> ScoreReport {
    let rules: [fn(&PageMetadata) -> RuleCredit; 8] = [
        title_rule,
        description_rule,
        open_graph_rule,
        twitter_rule,
        canonical_rule,
        robots_rule,
        keywords_rule,
        structured_data_rule,
    ];

    let mut total = 0u32;
    let mut recommendations = Vec::new();

    for rule in rules {
        let credit = rule(metadata);
        total += credit.points;
        if let Some(recommendation) = credit.recommendation {
            recommendations.push(recommendation);
        }
    }

    let score = total.min(MAX_SCORE);
    debug!(score, issues = recommendations.len(), "metadata scored");

    ScoreReport {
        score,
        recommendations,
    }
}
