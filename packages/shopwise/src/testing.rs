//! Mock implementations for testing without real search or LLM calls.
//!
//! Both mocks record their calls so tests can assert how the pipeline
//! drove them (how many searches, with which result counts, in which
//! order). Internals are shared behind `Arc`, so a clone observes the same
//! call log as the instance handed to the pipeline.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::analyst::{ChatModel, GenerationParams};
use crate::error::Result;
use crate::search::Searcher;
use crate::types::SearchHit;
use openai_client::OpenAIError;
use tavily_client::TavilyError;

/// Record of a call made to [`MockSearcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub max_results: usize,
}

/// A mock searcher with canned results keyed by query.
///
/// Unknown queries return no hits.
#[derive(Default, Clone)]
pub struct MockSearcher {
    results: Arc<RwLock<HashMap<String, Vec<SearchHit>>>>,
    fail_queries: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<SearchCall>>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add canned hits for a query.
    pub fn with_hits(self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.results.write().unwrap().insert(query.to_string(), hits);
        self
    }

    /// Add canned hits built from titles; urls and snippets are derived.
    pub fn with_titles(self, query: &str, titles: &[&str]) -> Self {
        let hits = titles
            .iter()
            .map(|t| SearchHit {
                title: t.to_string(),
                url: format!("https://example.com/{}", t.to_lowercase().replace(' ', "-")),
                snippet: format!("Details about {}", t),
            })
            .collect();
        self.with_hits(query, hits)
    }

    /// Make a query fail with a search backend error.
    pub fn fail_query(self, query: &str) -> Self {
        self.fail_queries.write().unwrap().push(query.to_string());
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        self.calls.write().unwrap().push(SearchCall {
            query: query.to_string(),
            max_results,
        });

        if self.fail_queries.read().unwrap().iter().any(|q| q == query) {
            return Err(TavilyError::Api {
                status: 503,
                message: "mock search outage".to_string(),
            }
            .into());
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

/// Record of a call made to [`MockChatModel`].
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub system: String,
    pub user: String,
    pub params: GenerationParams,
}

/// A mock chat model with scripted replies.
///
/// JSON-constrained calls (the judge) answer with the configured judge
/// reply, defaulting to `"{}"`. Plain calls (summarization) answer with the
/// summary configured for the exact user content, defaulting to a derived
/// placeholder.
#[derive(Default, Clone)]
pub struct MockChatModel {
    judge_reply: Arc<RwLock<Option<String>>>,
    summaries: Arc<RwLock<HashMap<String, String>>>,
    fail_markers: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<GenerationCall>>>,
}

impl MockChatModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply for JSON-constrained (judge) calls.
    pub fn with_judge_reply(self, reply: &str) -> Self {
        *self.judge_reply.write().unwrap() = Some(reply.to_string());
        self
    }

    /// Set the reply for a plain (summarization) call with this exact user
    /// content.
    pub fn with_summary(self, user_content: &str, reply: &str) -> Self {
        self.summaries
            .write()
            .unwrap()
            .insert(user_content.to_string(), reply.to_string());
        self
    }

    /// Fail any call whose user content contains the marker.
    pub fn fail_when_user_contains(self, marker: &str) -> Self {
        self.fail_markers.write().unwrap().push(marker.to_string());
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls.read().unwrap().clone()
    }

    /// Calls that requested a JSON object (the judge call sites).
    pub fn judge_calls(&self) -> Vec<GenerationCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.params.json_response)
            .collect()
    }

    /// Calls that requested plain text (the summarization call sites).
    pub fn extract_calls(&self) -> Vec<GenerationCall> {
        self.calls()
            .into_iter()
            .filter(|c| !c.params.json_response)
            .collect()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn generate(&self, system: &str, user: &str, params: GenerationParams) -> Result<String> {
        self.calls.write().unwrap().push(GenerationCall {
            system: system.to_string(),
            user: user.to_string(),
            params,
        });

        if self
            .fail_markers
            .read()
            .unwrap()
            .iter()
            .any(|m| user.contains(m))
        {
            return Err(OpenAIError::Network("mock network failure".to_string()).into());
        }

        if params.json_response {
            return Ok(self
                .judge_reply
                .read()
                .unwrap()
                .clone()
                .unwrap_or_else(|| "{}".to_string()));
        }

        Ok(self
            .summaries
            .read()
            .unwrap()
            .get(user)
            .cloned()
            .unwrap_or_else(|| format!("Summary of: {}", user)))
    }
}
