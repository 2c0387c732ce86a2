//! AI shopping recommendation pipeline.
//!
//! Answers shopping questions by composing three steps linearly: a web
//! search for product listings, a per-listing LLM summarization pass, and
//! one LLM judging call that ranks the listings and picks a winner.
//!
//! Data flows strictly forward: question → hits → enriched products →
//! verdict → [`Recommendation`]. There are no feedback loops and no state
//! shared across runs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopwise::{Analyst, OpenAiModel, ShopWise, ShopWiseConfig, TavilySearcher};
//!
//! let config = ShopWiseConfig::from_env()?;
//!
//! let searcher = Arc::new(TavilySearcher::new(config.tavily_api_key.expose()));
//! let model = OpenAiModel::new(config.openai_api_key.expose(), config.openai_model.clone());
//! let pipeline = ShopWise::new(searcher, Analyst::new(Arc::new(model)));
//!
//! let result = pipeline.run("iPhone 15 Pro vs Pixel 8 Pro").await;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```
//!
//! # Degradation policy
//!
//! The pipeline trades correctness for availability: it always completes
//! and returns a well-formed [`Recommendation`]. A failed search yields no
//! hits, a failed summarization an empty summary, and unparseable judge
//! output the fixed [`Verdict::fallback`]. Failure causes are logged via
//! `tracing`, never surfaced to the caller. The one exception is
//! configuration: missing credentials fail fast at construction.
//!
//! # Modules
//!
//! - [`types`] - Domain types (hits, enriched products, verdicts, results)
//! - [`question`] - "A vs B" comparison parsing
//! - [`search`] - Search seam and Tavily-backed implementation
//! - [`analyst`] - Generation seam, summarizer and judge
//! - [`pipeline`] - The linear orchestration
//! - [`config`] - Environment-sourced configuration
//! - [`testing`] - Mock implementations for tests

pub mod analyst;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod question;
pub mod search;
pub mod security;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use analyst::{parse_verdict, Analyst, ChatModel, GenerationParams, OpenAiModel};
pub use config::{ShopWiseConfig, DEFAULT_MODEL};
pub use error::{Result, ShopWiseError};
pub use pipeline::ShopWise;
pub use question::split_comparison;
pub use search::{Searcher, TavilySearcher};
pub use security::SecretString;
pub use types::{
    clip_snippet, EnrichedProduct, Recommendation, SearchHit, Verdict, MAX_SOURCES,
    SNIPPET_MAX_CHARS,
};

// Re-export testing utilities
pub use testing::{MockChatModel, MockSearcher};
