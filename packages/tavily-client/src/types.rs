//! Tavily API request and response types.

use serde::{Deserialize, Serialize};

/// Request body for the `/search` endpoint.
///
/// Tavily authenticates via the `api_key` field in the body rather than a
/// header.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub api_key: String,
    pub query: String,
    pub max_results: usize,
    pub search_depth: String,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub include_images: bool,
}

impl SearchRequest {
    /// Build an advanced-depth search request with answer synthesis,
    /// raw content, and images disabled.
    pub fn advanced(api_key: impl Into<String>, query: impl Into<String>, max_results: usize) -> Self {
        Self {
            api_key: api_key.into(),
            query: query.into(),
            max_results,
            search_depth: "advanced".to_string(),
            include_answer: false,
            include_raw_content: false,
            include_images: false,
        }
    }
}

/// Response body from the `/search` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
}

/// A single Tavily search result.
///
/// Fields the API omits deserialize to empty strings, mirroring how the
/// API's own clients treat partial results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
}
