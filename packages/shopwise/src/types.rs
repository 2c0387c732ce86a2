//! Domain types for the recommendation pipeline.

use serde::{Deserialize, Serialize};

/// Maximum number of snippet characters kept from a search result.
pub const SNIPPET_MAX_CHARS: usize = 500;

/// Maximum number of enriched products cited in a [`Recommendation`].
pub const MAX_SOURCES: usize = 4;

/// Clip backend content to the first [`SNIPPET_MAX_CHARS`] characters.
///
/// Counts Unicode scalar values, not bytes, so multi-byte content is never
/// split mid-character.
pub fn clip_snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((idx, _)) => content[..idx].to_string(),
        None => content.to_string(),
    }
}

/// A single normalized search result, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A search hit plus its model-generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub summary: String,
}

impl EnrichedProduct {
    /// Attach a summary to a hit.
    pub fn from_hit(hit: SearchHit, summary: impl Into<String>) -> Self {
        Self {
            title: hit.title,
            url: hit.url,
            snippet: hit.snippet,
            summary: summary.into(),
        }
    }
}

/// The structured winner/ranking/reasons produced by the judging step.
///
/// Keys the model omits deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub ranking: Vec<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl Verdict {
    /// Fixed substitute used when the judge output cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            winner: "Unable to determine".to_string(),
            ranking: Vec::new(),
            reasons: vec!["Error parsing recommendation".to_string()],
        }
    }
}

/// Terminal pipeline output, returned to the caller.
///
/// Serializes with exactly the keys `query`, `winner`, `ranking`,
/// `reasons`, `sources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub query: String,
    pub winner: String,
    pub ranking: Vec<String>,
    pub reasons: Vec<String>,
    pub sources: Vec<EnrichedProduct>,
}

impl Recommendation {
    /// Assemble the final result, keeping the first [`MAX_SOURCES`]
    /// enriched products in their original order as citations.
    pub fn assemble(query: impl Into<String>, verdict: Verdict, mut products: Vec<EnrichedProduct>) -> Self {
        products.truncate(MAX_SOURCES);
        Self {
            query: query.into(),
            winner: verdict.winner,
            ranking: verdict.ranking,
            reasons: verdict.reasons,
            sources: products,
        }
    }
}
