#![warn(missing_docs)]

//! lescore - Fixed-weight SEO metadata scoring engine.
//!
//! *Le Score* (The Score) - scores a page-metadata record against a fixed
//! rule table and produces an integrity score in `[0, 100]` plus an ordered
//! list of improvement recommendations. Scoring is a pure function: absent
//! fields are "not present", never an error.

/// Scoring rules and the score report.
pub mod engine;
/// Page metadata model.
pub mod metadata;
/// Schema.org structured-data variants.
pub mod schema;

pub use engine::{score, ScoreReport, MAX_SCORE};
pub use metadata::{OpenGraphTags, PageMetadata, TwitterCardTags};
pub use schema::StructuredData;
