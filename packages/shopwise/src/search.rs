//! Search seam: the `Searcher` trait and its Tavily-backed implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{clip_snippet, SearchHit};
use tavily_client::{SearchResultItem, TavilyClient};

/// Web search abstraction for product discovery.
///
/// Implementations wrap a specific search backend and normalize results to
/// [`SearchHit`]s. The pipeline only ever talks to this trait, so tests can
/// substitute [`crate::testing::MockSearcher`].
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Search for product listings, returning at most `max_results` hits.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}

/// Normalize raw Tavily results to search hits, clipping snippets.
pub(crate) fn normalize_hits(results: Vec<SearchResultItem>) -> Vec<SearchHit> {
    results
        .into_iter()
        .map(|r| SearchHit {
            title: r.title,
            url: r.url,
            snippet: clip_snippet(&r.content),
        })
        .collect()
}

/// Tavily-backed searcher.
pub struct TavilySearcher {
    client: TavilyClient,
}

impl TavilySearcher {
    /// Create a searcher with the given Tavily API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: TavilyClient::new(api_key.into()),
        }
    }

    /// Wrap an existing client (custom base URL, test server).
    pub fn with_client(client: TavilyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Searcher for TavilySearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        let results = self.client.search(query, max_results).await?;
        Ok(normalize_hits(results))
    }
}
