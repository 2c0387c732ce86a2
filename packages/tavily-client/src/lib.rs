//! Pure Tavily REST API client.
//!
//! A minimal client for the Tavily search API. Sends a single search
//! request and returns the typed result list; no pagination, no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use tavily_client::TavilyClient;
//!
//! let client = TavilyClient::new("tvly-...".into());
//!
//! let results = client.search("best headphones under $500", 8).await?;
//! for r in &results {
//!     println!("{} — {}", r.title, r.url);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TavilyError};
pub use types::{SearchRequest, SearchResponse, SearchResultItem};

use std::time::Duration;

const BASE_URL: &str = "https://api.tavily.com";

/// Fixed request timeout for search calls.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TavilyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Run one advanced-depth search, returning at most `max_results` items.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResultItem>> {
        let request = SearchRequest::advanced(&self.api_key, query, max_results);

        tracing::debug!(query, max_results, "Tavily search");

        let url = format!("{}/search", self.base_url);
        let resp = self
            .client
            .post(&url)
            .timeout(SEARCH_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_resp: SearchResponse = resp
            .json()
            .await
            .map_err(|e| TavilyError::Parse(e.to_string()))?;

        tracing::debug!(count = search_resp.results.len(), "Tavily search complete");

        Ok(search_resp.results)
    }
}
