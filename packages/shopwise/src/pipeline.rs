//! The recommendation pipeline: search, enrich, judge, assemble.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analyst::Analyst;
use crate::question::split_comparison;
use crate::search::Searcher;
use crate::types::{EnrichedProduct, Recommendation, SearchHit};

/// Result count for a plain question.
const DEFAULT_RESULTS: usize = 8;

/// Result count per side of an "A vs B" comparison.
const COMPARISON_RESULTS: usize = 4;

/// The shopping recommendation pipeline.
///
/// Composes a [`Searcher`] and an [`Analyst`] linearly: question → hits →
/// enriched products → verdict → [`Recommendation`]. Each run is stateless
/// with respect to prior runs.
pub struct ShopWise {
    searcher: Arc<dyn Searcher>,
    analyst: Analyst,
}

impl ShopWise {
    pub fn new(searcher: Arc<dyn Searcher>, analyst: Analyst) -> Self {
        Self { searcher, analyst }
    }

    /// Run the full pipeline for one question.
    ///
    /// Never returns an error: search failures degrade to no hits,
    /// summarization failures to empty summaries, and unparseable judge
    /// output to the fallback verdict. Causes go to the log.
    pub async fn run(&self, question: &str) -> Recommendation {
        let hits = self.gather_hits(question).await;
        info!(count = hits.len(), "search complete");

        let mut products = Vec::with_capacity(hits.len());
        for hit in hits {
            let summary = self.analyst.extract_info(&hit.snippet).await;
            products.push(EnrichedProduct::from_hit(hit, summary));
        }

        let verdict = self.analyst.judge_products(question, &products).await;
        info!(winner = %verdict.winner, "verdict ready");

        Recommendation::assemble(question, verdict, products)
    }

    /// Search once for a plain question, or once per side of an "A vs B"
    /// comparison with A's hits ordered before B's.
    async fn gather_hits(&self, question: &str) -> Vec<SearchHit> {
        match split_comparison(question) {
            Some((product_a, product_b)) => {
                debug!(%product_a, %product_b, "comparison question");
                let mut hits = self.search_or_empty(&product_a, COMPARISON_RESULTS).await;
                hits.extend(self.search_or_empty(&product_b, COMPARISON_RESULTS).await);
                hits
            }
            None => self.search_or_empty(question, DEFAULT_RESULTS).await,
        }
    }

    /// One search call; a failure degrades to no hits. The caller cannot
    /// distinguish "no matches" from "search failed".
    async fn search_or_empty(&self, query: &str, max_results: usize) -> Vec<SearchHit> {
        match self.searcher.search(query, max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(query, error = %e, "search failed, continuing with no hits");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockChatModel, MockSearcher};

    fn pipeline(searcher: &MockSearcher, model: &MockChatModel) -> ShopWise {
        ShopWise::new(Arc::new(searcher.clone()), Analyst::new(Arc::new(model.clone())))
    }

    #[tokio::test]
    async fn test_search_failure_degrades_to_empty_sources() {
        let searcher = MockSearcher::new().fail_query("best headphones");
        let model = MockChatModel::new().with_judge_reply("not json");

        let result = pipeline(&searcher, &model).run("best headphones").await;

        assert!(result.sources.is_empty());
        assert_eq!(result.winner, "Unable to determine");
        // The judge is still consulted, with an empty product list.
        assert_eq!(model.judge_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_enrichment_preserves_hit_order() {
        let searcher = MockSearcher::new().with_titles("best laptops", &["XPS 13", "MacBook Air", "ThinkPad X1"]);
        let model = MockChatModel::new();

        let result = pipeline(&searcher, &model).run("best laptops").await;

        let titles: Vec<_> = result.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["XPS 13", "MacBook Air", "ThinkPad X1"]);
    }
}
