//! Property tests for the scoring engine: clamping and monotonicity.

use lescore::engine::MAX_SCORE;
use lescore::schema::{Article, StructuredData};
use lescore::{score, OpenGraphTags, PageMetadata, TwitterCardTags};
use proptest::option;
use proptest::prelude::*;

fn arb_field() -> impl Strategy<Value = Option<String>> {
    option::of("[a-z ]{0,200}")
}

fn arb_open_graph() -> impl Strategy<Value = Option<OpenGraphTags>> {
    option::of(
        (arb_field(), arb_field(), arb_field()).prop_map(|(title, description, image)| {
            OpenGraphTags {
                title,
                description,
                image,
            }
        }),
    )
}

fn arb_twitter() -> impl Strategy<Value = Option<TwitterCardTags>> {
    option::of(
        (arb_field(), arb_field(), arb_field()).prop_map(|(title, description, image)| {
            TwitterCardTags {
                title,
                description,
                image,
            }
        }),
    )
}

fn arb_structured_data() -> impl Strategy<Value = Vec<StructuredData>> {
    proptest::collection::vec(
        "[a-z]{1,12}".prop_map(|name| StructuredData::Article(Article { name })),
        0..6,
    )
}

prop_compose! {
    fn arb_metadata()(
        title in arb_field(),
        description in arb_field(),
        open_graph in arb_open_graph(),
        twitter in arb_twitter(),
        canonical in arb_field(),
        robots in arb_field(),
        keywords in arb_field(),
        structured_data in arb_structured_data(),
    ) -> PageMetadata {
        PageMetadata {
            title,
            description,
            open_graph,
            twitter,
            canonical,
            robots,
            keywords,
            structured_data,
        }
    }
}

proptest! {
    #[test]
    fn score_never_exceeds_max(metadata in arb_metadata()) {
        prop_assert!(score(&metadata).score <= MAX_SCORE);
    }

    #[test]
    fn adding_canonical_never_decreases_score(metadata in arb_metadata()) {
        let mut without = metadata.clone();
        without.canonical = None;
        let mut with = metadata;
        with.canonical = Some("https://example.com/page".to_string());
        prop_assert!(score(&with).score >= score(&without).score);
    }

    #[test]
    fn adding_robots_never_decreases_score(metadata in arb_metadata()) {
        let mut without = metadata.clone();
        without.robots = None;
        let mut with = metadata;
        with.robots = Some("index, follow".to_string());
        prop_assert!(score(&with).score >= score(&without).score);
    }

    #[test]
    fn adding_keywords_never_decreases_score(metadata in arb_metadata()) {
        let mut without = metadata.clone();
        without.keywords = None;
        let mut with = metadata;
        with.keywords = Some("seo".to_string());
        prop_assert!(score(&with).score >= score(&without).score);
    }

    #[test]
    fn adding_title_never_decreases_score(metadata in arb_metadata(), length in 1usize..200) {
        let mut without = metadata.clone();
        without.title = None;
        let mut with = metadata;
        with.title = Some("x".repeat(length));
        prop_assert!(score(&with).score >= score(&without).score);
    }

    #[test]
    fn structured_data_contribution_is_monotonic(
        metadata in arb_metadata(),
        extra in "[a-z]{1,12}",
    ) {
        let fewer = score(&metadata).score;
        let mut grown = metadata;
        grown
            .structured_data
            .push(StructuredData::Article(Article { name: extra }));
        prop_assert!(score(&grown).score >= fewer);
    }

    #[test]
    fn recommendation_count_never_exceeds_rule_count(metadata in arb_metadata()) {
        prop_assert!(score(&metadata).recommendations.len() <= 8);
    }
}
