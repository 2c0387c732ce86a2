//! End-to-end pipeline tests over mock backends.
//!
//! These exercise the full search → enrich → judge → assemble flow without
//! network access, asserting on the mocks' call logs.

use std::sync::Arc;

use shopwise::testing::{MockChatModel, MockSearcher, SearchCall};
use shopwise::{Analyst, Recommendation, SearchHit, ShopWise, Verdict};

fn pipeline(searcher: &MockSearcher, model: &MockChatModel) -> ShopWise {
    ShopWise::new(
        Arc::new(searcher.clone()),
        Analyst::new(Arc::new(model.clone())),
    )
}

#[tokio::test]
async fn plain_question_issues_one_search_with_eight_results() {
    let searcher = MockSearcher::new().with_titles("best headphones under $500", &["Sony XM5"]);
    let model = MockChatModel::new();

    pipeline(&searcher, &model).run("best headphones under $500").await;

    assert_eq!(
        searcher.calls(),
        vec![SearchCall {
            query: "best headphones under $500".to_string(),
            max_results: 8,
        }]
    );
}

#[tokio::test]
async fn comparison_question_issues_two_searches_with_four_results_each() {
    let searcher = MockSearcher::new()
        .with_titles("iPhone 15 Pro", &["iPhone 15 Pro review"])
        .with_titles("Pixel 8 Pro", &["Pixel 8 Pro review"]);
    let model = MockChatModel::new();

    pipeline(&searcher, &model).run("iPhone 15 Pro vs Pixel 8 Pro").await;

    assert_eq!(
        searcher.calls(),
        vec![
            SearchCall {
                query: "iPhone 15 Pro".to_string(),
                max_results: 4,
            },
            SearchCall {
                query: "Pixel 8 Pro".to_string(),
                max_results: 4,
            },
        ]
    );
}

#[tokio::test]
async fn comparison_concatenates_first_product_hits_before_second() {
    let searcher = MockSearcher::new()
        .with_titles("Sony XM5", &["XM5 review", "XM5 deals"])
        .with_titles("Bose QC Ultra", &["QC Ultra review"]);
    let model = MockChatModel::new();

    let result = pipeline(&searcher, &model).run("Sony XM5 vs Bose QC Ultra").await;

    let titles: Vec<_> = result.sources.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["XM5 review", "XM5 deals", "QC Ultra review"]);
}

#[tokio::test]
async fn sources_are_capped_at_four_in_original_order() {
    let searcher = MockSearcher::new().with_titles(
        "best laptops",
        &["L1", "L2", "L3", "L4", "L5", "L6", "L7"],
    );
    let model = MockChatModel::new();

    let result = pipeline(&searcher, &model).run("best laptops").await;

    assert_eq!(result.sources.len(), 4);
    let titles: Vec<_> = result.sources.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["L1", "L2", "L3", "L4"]);

    // All seven hits were enriched; the cap applies only to citations.
    assert_eq!(model.extract_calls().len(), 7);
}

#[tokio::test]
async fn zero_hits_still_invokes_the_judge_once() {
    let searcher = MockSearcher::new();
    let model = MockChatModel::new().with_judge_reply("no products, no json");

    let result = pipeline(&searcher, &model).run("discontinued gadget nobody sells").await;

    assert_eq!(model.extract_calls().len(), 0);
    let judge_calls = model.judge_calls();
    assert_eq!(judge_calls.len(), 1);
    assert!(judge_calls[0].user.contains("[]"));

    assert!(result.sources.is_empty());
    assert_eq!(result.winner, "Unable to determine");
}

#[tokio::test]
async fn non_json_judge_reply_yields_the_fallback_verdict() {
    let searcher = MockSearcher::new().with_titles("best headphones", &["Sony XM5"]);
    let model = MockChatModel::new().with_judge_reply("I cannot decide");

    let result = pipeline(&searcher, &model).run("best headphones").await;

    assert_eq!(result.winner, "Unable to determine");
    assert!(result.ranking.is_empty());
    assert_eq!(result.reasons, vec!["Error parsing recommendation".to_string()]);
}

#[tokio::test]
async fn summarization_failure_blanks_only_the_failed_item() {
    let hits = vec![
        SearchHit {
            title: "Good hit".to_string(),
            url: "https://example.com/good".to_string(),
            snippet: "solid specs".to_string(),
        },
        SearchHit {
            title: "Bad hit".to_string(),
            url: "https://example.com/bad".to_string(),
            snippet: "UNREACHABLE content".to_string(),
        },
    ];
    let searcher = MockSearcher::new().with_hits("best speakers", hits);
    let model = MockChatModel::new()
        .with_summary("solid specs", "A solid speaker.")
        .fail_when_user_contains("UNREACHABLE");

    let result = pipeline(&searcher, &model).run("best speakers").await;

    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].summary, "A solid speaker.");
    assert_eq!(result.sources[1].summary, "");
}

#[tokio::test]
async fn result_round_trips_through_json() {
    let searcher = MockSearcher::new().with_titles("best headphones", &["Sony XM5", "Bose QC"]);
    let model = MockChatModel::new().with_judge_reply(
        r#"{"winner": "Sony XM5", "ranking": ["Sony XM5", "Bose QC"], "reasons": ["Better ANC", "Price"]}"#,
    );

    let result = pipeline(&searcher, &model).run("best headphones").await;

    let json = serde_json::to_string(&result).unwrap();
    let parsed: Recommendation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[tokio::test]
async fn scenario_best_headphones_under_500() {
    let question = "best headphones under $500";
    let searcher = MockSearcher::new().with_titles(question, &["Sony XM5", "Bose QC Ultra", "AirPods Max"]);
    let model = MockChatModel::new().with_judge_reply(
        r#"{"winner": "Sony XM5", "ranking": ["Sony XM5", "Bose QC Ultra", "AirPods Max"], "reasons": ["Best value"]}"#,
    );

    let result = pipeline(&searcher, &model).run(question).await;

    assert_eq!(result.query, question);
    assert_eq!(result.winner, "Sony XM5");
    assert_eq!(result.ranking.len(), 3);
    assert_eq!(searcher.calls().len(), 1);
    assert_eq!(model.extract_calls().len(), 3);
    assert_eq!(model.judge_calls().len(), 1);
}

#[tokio::test]
async fn scenario_iphone_vs_pixel() {
    let searcher = MockSearcher::new()
        .with_titles("iPhone 15 Pro", &["iPhone review", "iPhone deals"])
        .with_titles("Pixel 8 Pro", &["Pixel review", "Pixel deals"]);
    let model = MockChatModel::new().with_judge_reply(
        r#"{"winner": "Pixel 8 Pro", "ranking": ["Pixel 8 Pro", "iPhone 15 Pro"], "reasons": ["Better camera"]}"#,
    );

    let result = pipeline(&searcher, &model).run("iPhone 15 Pro vs Pixel 8 Pro").await;

    // Two searches, four enrichments in concatenated order, one judge call
    // over the combined set.
    assert_eq!(searcher.calls().len(), 2);
    let extract_users: Vec<_> = model
        .extract_calls()
        .iter()
        .map(|c| c.user.clone())
        .collect();
    assert_eq!(
        extract_users,
        vec![
            "Details about iPhone review",
            "Details about iPhone deals",
            "Details about Pixel review",
            "Details about Pixel deals",
        ]
    );
    let judge_calls = model.judge_calls();
    assert_eq!(judge_calls.len(), 1);
    assert!(judge_calls[0].user.contains("iPhone review"));
    assert!(judge_calls[0].user.contains("Pixel deals"));

    assert_eq!(result.winner, "Pixel 8 Pro");
    assert_eq!(result.sources.len(), 4);
}

#[tokio::test]
async fn total_backend_failure_still_returns_a_well_formed_result() {
    let searcher = MockSearcher::new()
        .fail_query("Sony XM5")
        .fail_query("Bose QC Ultra");
    let model = MockChatModel::new().fail_when_user_contains("Question:");

    let result = pipeline(&searcher, &model).run("Sony XM5 vs Bose QC Ultra").await;

    assert_eq!(result.query, "Sony XM5 vs Bose QC Ultra");
    assert_eq!(result.winner, "Unable to determine");
    assert!(result.ranking.is_empty());
    assert!(result.sources.is_empty());
    assert_eq!(Verdict::fallback().reasons, result.reasons);
}
